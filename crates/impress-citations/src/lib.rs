//! impress-citations: BibTeX-style numeric citation assignment.
//!
//! Derives deterministic cite keys from (title, authors, year), assigns
//! dense `[n]` numbers in first-seen order with dedup on the derived key,
//! and formats inline markers and reference lists — the numbering scheme a
//! typesetter applies when citations get `[n]` on first appearance and
//! reuse it thereafter.
//!
//! # Key grammar
//!
//! `surname + year + first significant title word`, lowercased, no
//! separators: `"srinivasan2024improving"`. Two stop-word styles control
//! which title word counts as significant ([`KeyStyle`]).
//!
//! # Layers
//!
//! - [`derive_key`] / [`CitationRegistry`] — key derivation and numbered,
//!   deduplicated storage
//! - [`format_marker`] / [`reference_list`] — display formatting
//! - [`PaperBinding`] — one-shot adapter from external paper batches to
//!   citation numbers
//!
//! The crate is pure and synchronous: no I/O, no global state, sentinel
//! values (`0`, `None`, `""`) instead of errors for every miss.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod binding;
pub mod citation;
pub mod format;
pub mod key;
pub mod registry;

pub use binding::*;
pub use citation::*;
pub use format::*;
pub use key::*;
pub use registry::*;

//! Cite key derivation.
//!
//! Keys follow the BibTeX convention of surname + year + first significant
//! title word (e.g. "srinivasan2024improving"). Derivation is a pure
//! function of its inputs so the same record always maps to the same key.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which stop-word set to use when picking the significant title word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum KeyStyle {
    /// Skip only articles, conjunctions, and common prepositions.
    #[default]
    Basic,
    /// Additionally skip generic academic nouns ("design", "system", ...)
    /// so keys line up with those hand-written in typeset documents.
    TypesetMatching,
}

lazy_static! {
    /// Articles, conjunctions, and common prepositions.
    static ref STOP_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        let words = [
            "a", "an", "the", "and", "or", "but", "in", "on", "at", "to",
            "for", "of", "with", "by",
        ];
        for word in words {
            set.insert(word);
        }
        set
    };

    /// Stop words plus generic academic nouns and verbs that carry no
    /// identifying information in a title.
    static ref TYPESET_STOP_WORDS: HashSet<&'static str> = {
        let mut set = STOP_WORDS.clone();
        let words = [
            "design", "analysis", "study", "review", "system", "method",
            "approach", "framework", "model", "tool", "application",
            "evaluation", "investigation", "examination", "exploration",
            "development", "implementation", "creation", "generation",
            "production", "construction", "building", "making", "creating",
            "developing", "implementing", "evaluating", "analyzing",
            "studying", "reviewing", "examining", "exploring",
            "investigating",
        ];
        for word in words {
            set.insert(word);
        }
        set
    };
}

/// Derive a cite key from a citation's descriptive fields.
///
/// Deterministic: identical inputs always produce the identical key.
///
/// # Examples
/// ```
/// use impress_citations::{derive_key, KeyStyle};
/// let key = derive_key(
///     "Improving Selection of Analogical Inspirations",
///     "Arvind Srinivasan",
///     "2024",
///     KeyStyle::Basic,
/// );
/// assert_eq!(key, "srinivasan2024improving");
/// ```
pub fn derive_key(title: &str, authors: &str, year: &str, style: KeyStyle) -> String {
    format!(
        "{}{}{}",
        first_author_surname(authors),
        clean_year(year),
        first_significant_word(title, style)
    )
}

/// Lowercased surname of the first author, or "unknown".
///
/// The author field is comma-separated; within the first segment the last
/// whitespace-delimited token is taken as the surname.
fn first_author_surname(authors: &str) -> String {
    authors
        .split(',')
        .next()
        .unwrap_or("")
        .split_whitespace()
        .last()
        .map(str::to_lowercase)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Strip a fractional suffix left over from numeric ingestion ("2024.0").
fn clean_year(year: &str) -> &str {
    year.split('.').next().unwrap_or(year)
}

/// First title token outside the style's stop-word set, or "paper".
fn first_significant_word(title: &str, style: KeyStyle) -> String {
    let stop_words: &HashSet<&'static str> = match style {
        KeyStyle::Basic => &STOP_WORDS,
        KeyStyle::TypesetMatching => &TYPESET_STOP_WORDS,
    };

    title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .find(|&word| !word.is_empty() && !stop_words.contains(word))
        .unwrap_or("paper")
        .to_string()
}

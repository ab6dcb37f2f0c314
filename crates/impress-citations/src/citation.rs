//! Citation record type.

use serde::{Deserialize, Serialize};

/// One bibliographic entry in a registry.
///
/// Created on first sight of its key and immutable afterwards; the display
/// fields are copied verbatim from the first record that produced the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Citation {
    /// Derived cite key (e.g. "srinivasan2024improving"), unique per registry.
    pub key: String,
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub year: String,
    /// Sequential number assigned at creation, starting from 1. Never
    /// reassigned for the lifetime of the registry.
    pub number: u32,
}

impl Citation {
    /// Format as a numbered reference-list line:
    /// `[n] authors. title. venue, year.`
    pub fn reference_entry(&self) -> String {
        format!(
            "[{}] {}. {}. {}, {}.",
            self.number, self.authors, self.title, self.venue, self.year
        )
    }

    /// Emit a fixed-template `@inproceedings` BibTeX entry.
    ///
    /// Cosmetic convenience, not a full BibTeX serializer: field values are
    /// written as-is, with no escaping of special characters.
    pub fn bibtex_entry(&self) -> String {
        format!(
            "@inproceedings{{{},\n  title={{{}}},\n  author={{{}}},\n  booktitle={{{}}},\n  year={{{}}},\n  pages={{{}}}\n}}",
            self.key, self.title, self.authors, self.venue, self.year, self.number
        )
    }

    /// Serialize to JSON for cross-app transfer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

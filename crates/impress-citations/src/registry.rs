//! Citation registry: key-deduplicated storage with dense sequential numbers.

use std::collections::HashMap;

use crate::citation::Citation;
use crate::key::{derive_key, KeyStyle};

/// Registry of citations keyed by derived cite key.
///
/// Numbers are assigned in first-seen order and form a dense `1..=N`
/// sequence with no gaps or reuse. Adding a record whose fields derive an
/// already-known key returns the existing entry unchanged
/// (first-writer-wins), so repeated adds are idempotent.
///
/// An explicit value, not a process-wide singleton: each consumer (and each
/// test) builds its own.
#[derive(Debug, Clone, Default)]
pub struct CitationRegistry {
    style: KeyStyle,
    citations: HashMap<String, Citation>,
    /// Keys in first-creation order; `order[i]` holds number `i + 1`.
    order: Vec<String>,
    merged_adds: u32,
}

impl CitationRegistry {
    /// Empty registry deriving keys with [`KeyStyle::Basic`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry deriving keys with the given style.
    pub fn with_style(style: KeyStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// The key style this registry derives with.
    pub fn style(&self) -> KeyStyle {
        self.style
    }

    /// Add a citation, deduplicating on the derived key.
    ///
    /// Returns the key either way. On a key collision the existing record
    /// wins: no new entry, no number consumed, stored fields untouched even
    /// if the new call's fields differ. Distinct records that derive the
    /// same key are silently merged; [`Self::merged_adds`] counts how often
    /// that happened.
    pub fn add(&mut self, title: &str, authors: &str, venue: &str, year: &str) -> String {
        let key = derive_key(title, authors, year, self.style);

        if self.citations.contains_key(&key) {
            self.merged_adds += 1;
            return key;
        }

        let citation = Citation {
            key: key.clone(),
            title: title.to_string(),
            authors: authors.to_string(),
            venue: venue.to_string(),
            year: year.to_string(),
            number: self.order.len() as u32 + 1,
        };
        self.citations.insert(key.clone(), citation);
        self.order.push(key.clone());
        key
    }

    /// Citation number for a key, or `0` if the key is unknown.
    pub fn number_of(&self, key: &str) -> u32 {
        self.citations.get(key).map_or(0, |c| c.number)
    }

    /// Citation stored under a key.
    pub fn get(&self, key: &str) -> Option<&Citation> {
        self.citations.get(key)
    }

    /// Citation holding a given number, if any number that low was assigned.
    ///
    /// O(1): numbers are dense, so `order[number - 1]` is the matching key.
    pub fn by_number(&self, number: u32) -> Option<&Citation> {
        let key = self.order.get(number.checked_sub(1)? as usize)?;
        self.citations.get(key)
    }

    /// All citations ascending by number.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Citation> {
        self.order.iter().filter_map(|key| self.citations.get(key))
    }

    /// Number of distinct citations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// How many adds were merged into an existing entry via key collision.
    /// Diagnostic only; merged adds never change stored records.
    pub fn merged_adds(&self) -> u32 {
        self.merged_adds
    }
}

//! Paper-to-citation binding.
//!
//! Adapts a batch of external paper records (CSV rows, API payloads) into a
//! populated registry plus a paper-id → cite-key map, so downstream
//! rendering can ask "what number is paper 17?" without knowing how keys
//! are derived.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::format::format_marker;
use crate::key::KeyStyle;
use crate::registry::CitationRegistry;

/// One external paper record, as supplied by an ingestion collaborator.
///
/// All fields are opaque display strings; `id` is any stable identifier the
/// caller uses for the paper (row number, database id, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub year: String,
}

impl PaperRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        authors: impl Into<String>,
        venue: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            venue: venue.into(),
            year: year.into(),
        }
    }
}

/// Binding from external paper ids to citation numbers.
///
/// Built in a single pass over the input batch; owns the registry it
/// populated. All methods after construction are reads, so a finished
/// binding can be shared freely.
#[derive(Debug, Clone)]
pub struct PaperBinding {
    registry: CitationRegistry,
    /// Paper id → cite key. Distinct papers whose fields derive the same
    /// key share one citation (and one number).
    paper_citations: HashMap<String, String>,
}

impl PaperBinding {
    /// Populate a fresh registry from a batch of records, in input order.
    ///
    /// Records missing a title or authors are skipped: they never enter the
    /// registry or the map, and their id resolves to citation number `0`.
    /// Keys are derived in [`KeyStyle::TypesetMatching`] so they line up
    /// with hand-written document cite keys.
    pub fn from_records(records: &[PaperRecord]) -> Self {
        let mut registry = CitationRegistry::with_style(KeyStyle::TypesetMatching);
        let mut paper_citations = HashMap::new();

        for record in records {
            if record.title.is_empty() || record.authors.is_empty() {
                continue;
            }
            let key = registry.add(&record.title, &record.authors, &record.venue, &record.year);
            paper_citations.insert(record.id.clone(), key);
        }

        Self {
            registry,
            paper_citations,
        }
    }

    /// The registry this binding populated.
    pub fn registry(&self) -> &CitationRegistry {
        &self.registry
    }

    /// Citation number for a paper id, or `0` if the paper is unknown or
    /// was skipped for missing fields.
    pub fn citation_number(&self, paper_id: &str) -> u32 {
        self.paper_citations
            .get(paper_id)
            .map_or(0, |key| self.registry.number_of(key))
    }

    /// Cite key for a paper id.
    pub fn citation_key(&self, paper_id: &str) -> Option<&str> {
        self.paper_citations.get(paper_id).map(String::as_str)
    }

    /// Marker for a set of paper ids, e.g. `"[1,3]"`. Unbound ids drop out.
    pub fn marker_for_papers(&self, paper_ids: &[&str]) -> String {
        let numbers: Vec<u32> = paper_ids.iter().map(|id| self.citation_number(id)).collect();
        format_marker(&numbers)
    }

    /// Every bound paper as `(paper_id, number, key)`, ascending by number.
    /// Ties (papers merged into one citation) order by paper id.
    pub fn papers_by_number(&self) -> Vec<(String, u32, String)> {
        let mut papers: Vec<(String, u32, String)> = self
            .paper_citations
            .iter()
            .map(|(id, key)| (id.clone(), self.registry.number_of(key), key.clone()))
            .collect();
        papers.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        papers
    }

    /// Human-readable report of every bound paper, ascending by citation
    /// number. Console/log output, not a machine-parsable format.
    pub fn report(&self) -> String {
        let mut report = String::from("Citation number report\n");
        report.push_str(&"=".repeat(50));
        report.push_str("\n\n");

        let papers = self.papers_by_number();
        for (paper_id, number, key) in &papers {
            match self.registry.get(key) {
                Some(citation) => {
                    report.push_str(&format!(
                        "[{:2}] {}. {}. {}, {}.\n",
                        number, citation.authors, citation.title, citation.venue, citation.year
                    ));
                }
                // Should not occur: every bound key was added to the
                // registry. Kept so a report never panics on a stale map.
                None => {
                    report.push_str(&format!("[{:2}] Paper {} (key: {})\n", number, paper_id, key));
                }
            }
        }

        report.push_str(&format!("\nTotal: {} papers", papers.len()));
        report
    }
}

//! Marker and reference-list formatting.
//!
//! Markers follow the conventional numbered-citation compaction: a
//! contiguous run of three or more collapses to a range (`[4-7]`), anything
//! sparser stays a comma list. Exactly two numbers are always written as a
//! list (`[1,2]`), never a range, so `[a,b]` and `[a-b]` stay unambiguous.

use std::collections::BTreeSet;

use crate::registry::CitationRegistry;

/// Format citation numbers as an inline bracket marker.
///
/// Zeros (the "uncited" sentinel) are dropped, the rest deduplicated and
/// sorted ascending. Empty input after filtering yields the empty string.
///
/// # Examples
/// ```
/// use impress_citations::format_marker;
/// assert_eq!(format_marker(&[3]), "[3]");
/// assert_eq!(format_marker(&[3, 1]), "[1,3]");
/// assert_eq!(format_marker(&[1, 2, 3]), "[1-3]");
/// assert_eq!(format_marker(&[1, 2, 4]), "[1,2,4]");
/// assert_eq!(format_marker(&[]), "");
/// ```
pub fn format_marker(numbers: &[u32]) -> String {
    let numbers: BTreeSet<u32> = numbers.iter().copied().filter(|&n| n > 0).collect();
    let (min, max) = match (numbers.first(), numbers.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return String::new(),
    };

    if numbers.len() == 1 {
        return format!("[{}]", min);
    }
    if numbers.len() >= 3 && max - min + 1 == numbers.len() as u32 {
        return format!("[{}-{}]", min, max);
    }
    let joined = numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("[{}]", joined)
}

/// Resolve keys against a registry and format the resulting numbers.
///
/// Unknown keys resolve to the `0` sentinel and are dropped before
/// formatting, so a marker never references an unregistered citation.
pub fn marker_for_keys(registry: &CitationRegistry, keys: &[&str]) -> String {
    let numbers: Vec<u32> = keys.iter().map(|key| registry.number_of(key)).collect();
    format_marker(&numbers)
}

/// Full reference list, one entry per line, ascending by number.
pub fn reference_list(registry: &CitationRegistry) -> String {
    registry
        .iter_ordered()
        .map(|citation| citation.reference_entry())
        .collect::<Vec<_>>()
        .join("\n")
}

/// BibTeX entry for a key, or the empty string if the key is unknown.
pub fn bibtex_entry_for(registry: &CitationRegistry, key: &str) -> String {
    registry
        .get(key)
        .map(|citation| citation.bibtex_entry())
        .unwrap_or_default()
}

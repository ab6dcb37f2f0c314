//! End-to-end tests for citation numbering and formatting.

use impress_citations::{
    bibtex_entry_for, derive_key, format_marker, marker_for_keys, reference_list,
    CitationRegistry, KeyStyle, PaperBinding, PaperRecord,
};

// === Key derivation ===

#[test]
fn test_derive_key_is_deterministic() {
    let derive = || {
        derive_key(
            "Improving Selection of Analogical Inspirations",
            "Arvind Srinivasan",
            "2024",
            KeyStyle::Basic,
        )
    };
    assert_eq!(derive(), derive());
    assert_eq!(derive(), "srinivasan2024improving");
}

#[test]
fn test_derive_key_variants_disagree_on_generic_nouns() {
    let basic = derive_key("A Framework for Parsing", "Jane Doe", "2023", KeyStyle::Basic);
    let typeset = derive_key(
        "A Framework for Parsing",
        "Jane Doe",
        "2023",
        KeyStyle::TypesetMatching,
    );
    assert_eq!(basic, "doe2023framework");
    assert_eq!(typeset, "doe2023parsing");
}

// === Registry numbering ===

#[test]
fn test_dense_numbering_after_distinct_adds() {
    let mut registry = CitationRegistry::new();
    let titles = [
        "Improving Selection of Analogical Inspirations",
        "BioSpark: Beyond Analogical Inspiration",
        "Scaling Laws for Neural Language Models",
        "Attention Is All You Need",
    ];
    let authors = ["Arvind Srinivasan", "Hyeonsu Kang", "Jared Kaplan", "Ashish Vaswani"];

    for (title, author) in titles.iter().zip(authors) {
        registry.add(title, author, "venue", "2024");
    }

    assert_eq!(registry.len(), 4);
    let numbers: Vec<u32> = registry.iter_ordered().map(|c| c.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    for n in 1..=4 {
        assert_eq!(registry.by_number(n).map(|c| c.number), Some(n));
    }
}

#[test]
fn test_add_twice_counts_once() {
    let mut registry = CitationRegistry::new();
    let k1 = registry.add("BioSpark", "Hyeonsu Kang", "CHI", "2025");
    let k2 = registry.add("BioSpark", "Hyeonsu Kang", "CHI", "2025");

    assert_eq!(k1, k2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_round_trip_key_number_citation() {
    let mut registry = CitationRegistry::new();
    let key = registry.add("Attention Is All You Need", "Ashish Vaswani", "NeurIPS", "2017");

    let citation = registry.by_number(registry.number_of(&key)).unwrap();
    assert_eq!(Some(citation), registry.get(&key));
}

// === Two-paper scenario ===

#[test]
fn test_two_paper_scenario() {
    let mut registry = CitationRegistry::new();
    let k1 = registry.add(
        "Improving Selection of Analogical Inspirations",
        "Arvind Srinivasan",
        "C&C",
        "2024",
    );
    let k2 = registry.add(
        "BioSpark: Beyond Analogical Inspiration",
        "Hyeonsu Kang",
        "CHI",
        "2025",
    );

    assert_ne!(k1, k2);
    assert_eq!(registry.number_of(&k1), 1);
    assert_eq!(registry.number_of(&k2), 2);
    assert_eq!(format_marker(&[1, 2]), "[1,2]");
    assert_eq!(marker_for_keys(&registry, &[&k1, &k2]), "[1,2]");
}

// === Formatting ===

#[test]
fn test_marker_compaction() {
    assert_eq!(format_marker(&[3]), "[3]");
    assert_eq!(format_marker(&[1, 3]), "[1,3]");
    assert_eq!(format_marker(&[1, 2, 3]), "[1-3]");
    assert_eq!(format_marker(&[1, 2, 4]), "[1,2,4]");
    assert_eq!(format_marker(&[]), "");
}

#[test]
fn test_reference_list_lines() {
    let mut registry = CitationRegistry::new();
    registry.add(
        "Improving Selection of Analogical Inspirations",
        "Arvind Srinivasan",
        "C&C",
        "2024",
    );
    registry.add(
        "BioSpark: Beyond Analogical Inspiration",
        "Hyeonsu Kang",
        "CHI",
        "2025",
    );

    let expected = "\
[1] Arvind Srinivasan. Improving Selection of Analogical Inspirations. C&C, 2024.
[2] Hyeonsu Kang. BioSpark: Beyond Analogical Inspiration. CHI, 2025.";
    assert_eq!(reference_list(&registry), expected);
}

#[test]
fn test_bibtex_emission() {
    let mut registry = CitationRegistry::new();
    let key = registry.add(
        "BioSpark: Beyond Analogical Inspiration",
        "Hyeonsu Kang",
        "CHI",
        "2025",
    );

    let expected = "@inproceedings{kang2025biospark,\n  \
        title={BioSpark: Beyond Analogical Inspiration},\n  \
        author={Hyeonsu Kang},\n  \
        booktitle={CHI},\n  \
        year={2025},\n  \
        pages={1}\n}";
    assert_eq!(bibtex_entry_for(&registry, &key), expected);
}

// === Paper binding ===

#[test]
fn test_binding_from_csv_like_batch() {
    let records = vec![
        PaperRecord::new(
            "7",
            "Improving Selection of Analogical Inspirations",
            "Arvind Srinivasan",
            "C&C",
            "2024.0",
        ),
        PaperRecord::new(
            "12",
            "BioSpark: Beyond Analogical Inspiration",
            "Hyeonsu Kang",
            "CHI",
            "2025.0",
        ),
        // No authors: excluded from citation assignment.
        PaperRecord::new("13", "Untitled Draft", "", "", "2025"),
    ];
    let binding = PaperBinding::from_records(&records);

    // Fractional year suffixes from numeric ingestion are cleaned.
    assert_eq!(binding.citation_key("7"), Some("srinivasan2024improving"));
    assert_eq!(binding.citation_number("7"), 1);
    assert_eq!(binding.citation_number("12"), 2);
    assert_eq!(binding.citation_number("13"), 0);

    assert_eq!(
        binding.papers_by_number(),
        vec![
            ("7".to_string(), 1, "srinivasan2024improving".to_string()),
            ("12".to_string(), 2, "kang2025biospark".to_string()),
        ]
    );
    assert_eq!(binding.marker_for_papers(&["7", "12", "13"]), "[1,2]");
}

#[test]
fn test_binding_report_shape() {
    let records = vec![
        PaperRecord::new("1", "Attention Is All You Need", "Ashish Vaswani", "NeurIPS", "2017"),
        PaperRecord::new("2", "Scaling Laws for Neural Language Models", "Jared Kaplan", "arXiv", "2020"),
    ];
    let binding = PaperBinding::from_records(&records);
    let report = binding.report();

    let mut lines = report.lines();
    assert_eq!(lines.next(), Some("Citation number report"));
    assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(
        lines.next(),
        Some("[ 1] Ashish Vaswani. Attention Is All You Need. NeurIPS, 2017.")
    );
    assert_eq!(
        lines.next(),
        Some("[ 2] Jared Kaplan. Scaling Laws for Neural Language Models. arXiv, 2020.")
    );
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("Total: 2 papers"));
    assert_eq!(lines.next(), None);
}

// tests/store_roundtrip.rs
//
// Persistence round-trips: write then read reproduces identical field
// values, including the sentinel website encodings.

use cr_scrape::record::{SchoolRecord, Website};
use cr_scrape::store;

fn sample() -> Vec<SchoolRecord> {
    vec![
        SchoolRecord {
            rank: 1,
            name: "Princeton University".into(),
            link: "https://www.usnews.com/best-colleges/princeton-university-2627".into(),
            website: Website::Url("https://www.princeton.edu".into()),
        },
        SchoolRecord {
            rank: 2,
            name: "University of California, Berkeley".into(),
            link: "https://www.usnews.com/best-colleges/uc-berkeley-1312".into(),
            website: Website::NotFound,
        },
        SchoolRecord {
            rank: 3,
            name: "Rice University".into(),
            link: "https://www.usnews.com/best-colleges/rice-university-3604".into(),
            website: Website::Failed,
        },
        SchoolRecord {
            rank: 4,
            name: "Tulane University".into(),
            link: "https://www.usnews.com/best-colleges/tulane-university-2029".into(),
            website: Website::Unset,
        },
    ]
}

#[test]
fn enriched_csv_round_trip_is_identity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("colleges_selenium.csv");

    let records = sample();
    store::save_enriched_csv(&path, &records).expect("write");
    let loaded = store::load_enriched_csv(&path).expect("read");

    assert_eq!(loaded, records);
}

#[test]
fn rankings_csv_round_trip_preserves_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("colleges.csv");

    let records = sample();
    store::save_rankings_csv(&path, &records).expect("write");
    let loaded = store::load_rankings_csv(&path).expect("read");

    assert_eq!(loaded.len(), records.len());
    for (got, want) in loaded.iter().zip(&records) {
        assert_eq!(got.rank, want.rank);
        assert_eq!(got.name, want.name);
        assert_eq!(got.link, want.link);
        // The rankings file carries no website column.
        assert!(got.website.is_unset());
    }
}

#[test]
fn enriched_csv_header_matches_legacy_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("colleges_selenium.csv");

    store::save_enriched_csv(&path, &sample()).expect("write");
    let text = std::fs::read_to_string(&path).expect("read back");
    let header = text.lines().next().expect("header line");
    assert_eq!(header, "rank,name,usnews_link,school_website");

    // Quoted comma-bearing name survives, sentinels are written verbatim.
    assert!(text.contains("\"University of California, Berkeley\""));
    assert!(text.contains("Not found"));
    assert!(text.contains("Error"));
}

#[test]
fn enriched_json_is_an_indented_object_array() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("colleges_selenium.json");

    store::save_enriched_json(&path, &sample()).expect("write");
    let text = std::fs::read_to_string(&path).expect("read back");

    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    let arr = parsed.as_array().expect("top-level array");
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[0]["rank"], 1);
    assert_eq!(arr[0]["school_website"], "https://www.princeton.edu");
    assert_eq!(arr[1]["school_website"], "Not found");
    // Pretty-printed, not a single line.
    assert!(text.lines().count() > 4);
}

#[test]
fn seed_falls_back_to_rankings_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let enriched = dir.path().join("colleges_selenium.csv");
    let rankings = dir.path().join("colleges.csv");

    store::save_rankings_csv(&rankings, &sample()).expect("write rankings");

    let (records, source) =
        store::load_enrichment_seed(&enriched, &rankings).expect("seed from rankings");
    assert_eq!(source, rankings);
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.website.is_unset()));
}

#[test]
fn seed_errors_when_nothing_exists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let enriched = dir.path().join("colleges_selenium.csv");
    let rankings = dir.path().join("colleges.csv");

    assert!(store::load_enrichment_seed(&enriched, &rankings).is_err());
}

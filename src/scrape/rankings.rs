// src/scrape/rankings.rs
//
// National-universities rankings page. Ground truth lives in the anchor
// tags pointing at per-school detail pages: href contains "/best-colleges/"
// plus a hyphenated slug, anchor text is the display name. Everything else
// on the page (nav, search, compare widgets) is filtered out by href.

use std::collections::HashSet;
use std::error::Error;

use scraper::{Html, Selector};

use crate::config::consts::{
    LINK_PATH_MARKER, MAX_SCHOOLS, MIN_NAME_LEN, RANKINGS_URL, SITE_ROOT, SKIP_HREF_WORDS,
};
use crate::core::{net, text::normalize_ws};
use crate::record::SchoolRecord;

/// Fetch the rankings page and extract school records.
/// Network or HTTP failure surfaces as an error; the caller may degrade
/// that to an empty run.
pub fn fetch() -> Result<Vec<SchoolRecord>, Box<dyn Error>> {
    let html = net::fetch(RANKINGS_URL)?;
    extract(&html)
}

/// Pure extraction, testable offline against fixtures.
///
/// Dedup is by href, first occurrence wins, order preserved; the list is
/// capped at [`MAX_SCHOOLS`] and ranks are reassigned densely from 1.
pub fn extract(html: &str) -> Result<Vec<SchoolRecord>, Box<dyn Error>> {
    let doc = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").map_err(|e| e.to_string())?;

    let mut candidates: Vec<(String, String)> = Vec::new();
    for a in doc.select(&anchors) {
        let Some(href) = a.value().attr("href") else { continue };
        if !href.contains(LINK_PATH_MARKER) || !href.contains('-') {
            continue;
        }
        if SKIP_HREF_WORDS.iter().any(|w| href.contains(w)) {
            continue;
        }

        let name = normalize_ws(&a.text().collect::<String>());
        if name.len() <= MIN_NAME_LEN {
            continue;
        }

        let link = if href.starts_with('/') {
            format!("{SITE_ROOT}{href}")
        } else {
            s!(href)
        };
        candidates.push((name, link));
    }

    Ok(dedup_and_rank(candidates))
}

fn dedup_and_rank(candidates: Vec<(String, String)>) -> Vec<SchoolRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<SchoolRecord> = Vec::new();

    for (name, link) in candidates {
        if !seen.insert(link.clone()) {
            continue;
        }
        let rank = out.len() as u32 + 1;
        out.push(SchoolRecord::new(rank, name, link));
        if out.len() >= MAX_SCHOOLS {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(links: &[(&str, &str)]) -> String {
        let mut html = s!("<html><body>");
        for (href, text) in links {
            html.push_str(&format!(r#"<p><a href="{href}">{text}</a></p>"#));
        }
        html.push_str("</body></html>");
        html
    }

    #[test]
    fn extracts_school_anchors_only() {
        let html = page(&[
            ("/best-colleges/princeton-university-2627", "Princeton University"),
            ("/best-colleges/rankings/national-universities", "Rankings home"),
            ("/best-colleges/search", "Search all"),
            ("/best-colleges/compare", "Compare tool"),
            ("/education/online", "Online Education"),
            ("/best-colleges/mit-2178", "MIT"),
            ("/best-colleges/yale-1426", "..."),
        ]);
        let records = extract(&html).unwrap();

        // Nav/search/compare filtered by href, "MIT" and "..." by length.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Princeton University");
        assert_eq!(
            records[0].link,
            "https://www.usnews.com/best-colleges/princeton-university-2627"
        );
    }

    #[test]
    fn dedup_keeps_first_seen_and_reranks_densely() {
        let html = page(&[
            ("/best-colleges/princeton-university-2627", "Princeton University"),
            ("/best-colleges/harvard-university-2155", "Harvard University"),
            ("/best-colleges/princeton-university-2627", "Princeton (duplicate)"),
            ("/best-colleges/yale-university-1426", "Yale University"),
        ]);
        let records = extract(&html).unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Princeton University", "Harvard University", "Yale University"]);
        let ranks: Vec<u32> = records.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn caps_at_max_schools() {
        let links: Vec<(String, String)> = (0..250)
            .map(|i| {
                (
                    format!("/best-colleges/school-number-{i}"),
                    format!("School Number {i}"),
                )
            })
            .collect();
        let borrowed: Vec<(&str, &str)> =
            links.iter().map(|(h, t)| (h.as_str(), t.as_str())).collect();
        let records = extract(&page(&borrowed)).unwrap();

        assert_eq!(records.len(), MAX_SCHOOLS);
        assert_eq!(records.last().unwrap().rank, MAX_SCHOOLS as u32);
    }

    #[test]
    fn absolute_hrefs_pass_through_untouched() {
        let html = page(&[(
            "https://www.usnews.com/best-colleges/rice-university-3604",
            "Rice University",
        )]);
        let records = extract(&html).unwrap();
        assert_eq!(
            records[0].link,
            "https://www.usnews.com/best-colleges/rice-university-3604"
        );
    }

    #[test]
    fn empty_document_yields_no_records() {
        assert!(extract("<html></html>").unwrap().is_empty());
        assert!(extract("").unwrap().is_empty());
    }

    #[test]
    fn anchor_text_is_whitespace_normalized() {
        let html = page(&[(
            "/best-colleges/duke-university-2920",
            "Duke\n        University",
        )]);
        let records = extract(&html).unwrap();
        assert_eq!(records[0].name, "Duke University");
    }
}

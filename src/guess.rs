// src/guess.rs
//
// Name-to-domain heuristic for schools whose website the browser pass did
// not resolve. Exact-match table first (order matters: the FIRST key that is
// a substring of the cleaned name wins), then a first-token fallback.

/// Boilerplate removed from display names before matching, in this order.
/// Each pattern is removed wherever it occurs; only the ends are trimmed.
const BOILERPLATE: &[&str] = &[
    "university of",
    "the ",
    " university",
    " college",
    "college of",
    ",",
];

/// Known schools whose domain can't be derived from the name.
/// Scanned top to bottom; keep additions at the end so existing
/// matches don't shift.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("princeton", "princeton.edu"),
    ("massachusetts institute of technology", "mit.edu"),
    ("harvard", "harvard.edu"),
    ("stanford", "stanford.edu"),
    ("yale", "yale.edu"),
    ("chicago", "uchicago.edu"),
    ("duke", "duke.edu"),
    ("johns hopkins", "jhu.edu"),
    ("northwestern", "northwestern.edu"),
    ("pennsylvania", "upenn.edu"),
    ("california institute of technology", "caltech.edu"),
    ("cornell", "cornell.edu"),
    ("brown", "brown.edu"),
    ("dartmouth", "dartmouth.edu"),
    ("columbia", "columbia.edu"),
    ("berkeley", "berkeley.edu"),
    ("rice", "rice.edu"),
    ("los angeles", "ucla.edu"),
    ("vanderbilt", "vanderbilt.edu"),
    ("notre dame", "nd.edu"),
    ("emory", "emory.edu"),
    ("carnegie mellon", "cmu.edu"),
    ("georgetown", "georgetown.edu"),
    ("michigan", "umich.edu"),
    ("southern california", "usc.edu"),
    ("virginia", "virginia.edu"),
    ("north carolina chapel hill", "unc.edu"),
    ("wake forest", "wfu.edu"),
    ("new york", "nyu.edu"),
    ("tufts", "tufts.edu"),
    ("florida", "ufl.edu"),
    ("rochester", "rochester.edu"),
    ("boston", "bu.edu"),
    ("william mary", "wm.edu"),
    ("brandeis", "brandeis.edu"),
    ("case western reserve", "case.edu"),
    ("georgia tech", "gatech.edu"),
    ("texas austin", "utexas.edu"),
    ("wisconsin madison", "wisc.edu"),
    ("tulane", "tulane.edu"),
    ("boston college", "bc.edu"),
    ("illinois urbana", "illinois.edu"),
    ("washington seattle", "washington.edu"),
    ("san diego", "ucsd.edu"),
    ("davis", "ucdavis.edu"),
    ("irvine", "uci.edu"),
    ("santa barbara", "ucsb.edu"),
];

/// Lower-case and strip boilerplate. Interior whitespace is deliberately
/// left alone; table keys are matched against this exact form.
pub fn clean_name(name: &str) -> String {
    let mut cleaned = name.to_lowercase();
    for pat in BOILERPLATE {
        cleaned = cleaned.replace(pat, "");
    }
    s!(cleaned.trim())
}

/// Best-guess institutional web address for a school display name.
/// Always returns a non-empty string; accuracy is not guaranteed.
pub fn construct_edu_url(school_name: &str) -> String {
    let cleaned = clean_name(school_name);

    for (key, domain) in SPECIAL_CASES {
        if cleaned.contains(key) {
            return format!("https://www.{domain}");
        }
    }

    match cleaned.split_whitespace().next() {
        Some(first) => format!("https://www.{first}.edu"),
        None => s!("Unknown"),
    }
}

// src/config/consts.rs

// Net config
pub const RANKINGS_URL: &str =
    "https://www.usnews.com/best-colleges/rankings/national-universities";
pub const SITE_ROOT: &str = "https://www.usnews.com";
// The site serves a bot page to unknown agents; present a desktop Chrome.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Rankings page anchors
pub const LINK_PATH_MARKER: &str = "/best-colleges/";
pub const SKIP_HREF_WORDS: &[&str] = &["rankings", "search", "compare"];
pub const MIN_NAME_LEN: usize = 3; // anchor text must be strictly longer
pub const MAX_SCHOOLS: usize = 100;

// Browser-driven enrichment
pub const NAV_TIMEOUT_SECS: u64 = 30;
pub const PAGE_SETTLE_SECS: u64 = 3;
pub const SCROLL_SETTLE_SECS: u64 = 2;
// Two scroll stops force the lazy-loaded profile link block to render.
pub const SCROLL_STOPS: &[u32] = &[600, 1200];
pub const WEBSITE_LINK_ATTR: &str = "edu_profile_link";

// Output files (fixed names, fixed column sets)
pub const RANKINGS_CSV: &str = "colleges.csv";
pub const RANKINGS_JSON: &str = "colleges.json";
pub const ENRICHED_CSV: &str = "colleges_selenium.csv";
pub const ENRICHED_JSON: &str = "colleges_selenium.json";

// Local log/cache dir
pub const STORE_DIR: &str = ".store";

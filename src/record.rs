// src/record.rs

/// Outcome of trying to determine a school's own website.
///
/// The legacy files encode these as magic strings ("Not found", "Error",
/// "Unknown"). Inside the program the outcome is typed; the string form
/// exists only at the persistence boundary via [`Website::as_field`] /
/// [`Website::from_field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Website {
    /// Never looked up.
    Unset,
    /// A concrete URL (from the browser lookup or the heuristic).
    Url(String),
    /// Page rendered but the profile link element was absent.
    NotFound,
    /// Navigation or session failure while visiting the page.
    Failed,
    /// The heuristic had nothing to work with (empty cleaned name).
    Unknown,
}

impl Website {
    pub fn as_field(&self) -> &str {
        match self {
            Website::Unset => "",
            Website::Url(u) => u,
            Website::NotFound => "Not found",
            Website::Failed => "Error",
            Website::Unknown => "Unknown",
        }
    }

    pub fn from_field(s: &str) -> Self {
        match s {
            "" => Website::Unset,
            "Not found" => Website::NotFound,
            "Error" => Website::Failed,
            "Unknown" => Website::Unknown,
            url => Website::Url(s!(url)),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Website::Unset)
    }
}

/// One school: dense 1-based rank, display name, detail-page URL,
/// and (once enriched) the school's own website.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolRecord {
    pub rank: u32,
    pub name: String,
    pub link: String,
    pub website: Website,
}

impl SchoolRecord {
    pub fn new(rank: u32, name: String, link: String) -> Self {
        Self { rank, name, link, website: Website::Unset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_fields_round_trip() {
        for field in ["", "Not found", "Error", "Unknown", "https://www.rice.edu"] {
            assert_eq!(Website::from_field(field).as_field(), field);
        }
    }

    #[test]
    fn sentinels_map_to_distinct_variants() {
        assert_eq!(Website::from_field(""), Website::Unset);
        assert_eq!(Website::from_field("Not found"), Website::NotFound);
        assert_eq!(Website::from_field("Error"), Website::Failed);
        assert_eq!(Website::from_field("Unknown"), Website::Unknown);
        assert_eq!(
            Website::from_field("https://www.mit.edu"),
            Website::Url(s!("https://www.mit.edu"))
        );
    }
}

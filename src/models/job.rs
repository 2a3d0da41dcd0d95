//! Job data model
//!
//! `RawJobEntry` is the ephemeral per-page unit produced by extraction;
//! `JobRecord` is the retained unit once an entry passes the criterion.
//! Both carry the same four fields pulled from the rendered page.

use url::Url;

/// A job card as extracted from the currently rendered result page.
///
/// All text fields are free text; `link` is the only identifier and carries
/// no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJobEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: Url,
}

/// A retained job record, immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: Url,
}

impl From<RawJobEntry> for JobRecord {
    fn from(entry: RawJobEntry) -> Self {
        Self {
            title: entry.title,
            company: entry.company,
            location: entry.location,
            link: entry.link,
        }
    }
}

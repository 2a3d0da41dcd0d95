//! Inclusion criterion
//!
//! The sole gate deciding whether an extracted entry is retained:
//! a case-insensitive substring test against the title only.

use crate::models::RawJobEntry;

const KEYWORDS: [&str; 2] = ["visa", "sponsorship"];

/// True iff one of the keywords appears anywhere in the entry's title.
///
/// Pure; company, location and link never participate.
pub fn matches(entry: &RawJobEntry) -> bool {
    let title = entry.title.to_lowercase();
    KEYWORDS.iter().any(|keyword| title.contains(keyword))
}

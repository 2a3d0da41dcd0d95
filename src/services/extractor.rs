//! Result-page extraction
//!
//! One script evaluation snapshots the job cards currently rendered on the
//! active page, in DOM order. Fields are picked independently per card; a
//! card missing any field (or with an unparsable link) is dropped on its own
//! without aborting the page.

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::infrastructure::PageDriver;
use crate::models::RawJobEntry;

pub(crate) const CARD_SELECTOR: &str = ".jobs-search-results__list-item";
const TITLE_SELECTOR: &str = ".job-card-list__title";
const COMPANY_SELECTOR: &str = ".job-card-container__company-name";
const LOCATION_SELECTOR: &str = ".job-card-container__metadata-item";

/// Raw card snapshot as returned by the page script; every field may be
/// absent when the corresponding element is missing from the card.
#[derive(Debug, Deserialize)]
struct RawCard {
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    link: Option<String>,
}

impl RawCard {
    fn into_entry(self) -> Result<RawJobEntry, String> {
        let title = self.title.ok_or("missing title")?;
        let company = self.company.ok_or("missing company")?;
        let location = self.location.ok_or("missing location")?;
        let link = self.link.ok_or("missing link")?;
        let link = Url::parse(&link).map_err(|e| format!("invalid link: {e}"))?;
        Ok(RawJobEntry {
            title,
            company,
            location,
            link,
        })
    }
}

pub struct ResultPageExtractor {
    js: String,
}

impl ResultPageExtractor {
    pub fn new() -> Self {
        let js = format!(
            r#"
            Array.from(document.querySelectorAll("{CARD_SELECTOR}")).map((card) => {{
                const text = (selector) => {{
                    const el = card.querySelector(selector);
                    return el ? el.textContent.trim() : null;
                }};
                const anchor = card.querySelector("a");
                return {{
                    title: text("{TITLE_SELECTOR}"),
                    company: text("{COMPANY_SELECTOR}"),
                    location: text("{LOCATION_SELECTOR}"),
                    link: anchor ? anchor.href : null,
                }};
            }})
            "#
        );
        Self { js }
    }

    /// Extract the job entries visible on the currently loaded page, in
    /// card order. Script failures are session failures and propagate.
    pub async fn extract<D: PageDriver>(&self, driver: &D) -> Result<Vec<RawJobEntry>> {
        let value = driver.eval(&self.js).await?;
        let cards: Vec<RawCard> = serde_json::from_value(value)?;

        let mut entries = Vec::with_capacity(cards.len());
        for (index, card) in cards.into_iter().enumerate() {
            match card.into_entry() {
                Ok(entry) => entries.push(entry),
                Err(reason) => debug!("Dropping job card {}: {}", index + 1, reason),
            }
        }
        Ok(entries)
    }
}

impl Default for ResultPageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::page_driver::testing::{FakeDriver, FakePage};
    use serde_json::json;

    #[test]
    fn extraction_preserves_card_order() {
        let driver = FakeDriver::with_pages(
            "",
            vec![FakePage {
                cards: json!([
                    {"title": "A", "company": "C1", "location": "L1", "link": "https://x.test/1"},
                    {"title": "B", "company": "C2", "location": "L2", "link": "https://x.test/2"},
                ]),
                has_next: false,
            }],
        );

        let extractor = ResultPageExtractor::new();
        let entries = tokio_test::block_on(extractor.extract(&driver)).unwrap();

        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn card_with_missing_field_is_dropped_alone() {
        let driver = FakeDriver::with_pages(
            "",
            vec![FakePage {
                cards: json!([
                    {"title": "Good", "company": "C", "location": "L", "link": "https://x.test/1"},
                    {"title": "No company", "company": null, "location": "L", "link": "https://x.test/2"},
                    {"title": "Bad link", "company": "C", "location": "L", "link": "not a url"},
                    {"title": "Also good", "company": "C", "location": "L", "link": "https://x.test/3"},
                ]),
                has_next: false,
            }],
        );

        let extractor = ResultPageExtractor::new();
        let entries = tokio_test::block_on(extractor.extract(&driver)).unwrap();

        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Also good"]);
    }

    #[test]
    fn empty_page_extracts_nothing() {
        let driver = FakeDriver::with_pages("", Vec::new());
        let extractor = ResultPageExtractor::new();
        let entries = tokio_test::block_on(extractor.extract(&driver)).unwrap();
        assert!(entries.is_empty());
    }
}

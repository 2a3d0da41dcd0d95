//! Pagination walk
//!
//! Walks the result pages of one location: extract the visible cards, apply
//! the criterion, then try the "next page" control. The control being absent
//! (or failing to activate) is the designed end-of-results signal, not an
//! error. A configurable page ceiling guards against a "next" control that
//! keeps reloading the same page.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::infrastructure::PageDriver;
use crate::models::{JobRecord, LocationCounts};
use crate::services::{matcher, ResultPageExtractor};

pub(crate) const NEXT_BUTTON: &str = ".next-button";

pub struct PaginationWalker {
    page_settle: Duration,
    max_pages: usize,
}

impl PaginationWalker {
    pub fn new(page_settle: Duration, max_pages: usize) -> Self {
        Self {
            page_settle,
            max_pages: max_pages.max(1),
        }
    }

    /// Walk all result pages for `location`, returning the matched records
    /// in page-then-card order together with the location's counters.
    pub async fn walk<D: PageDriver>(
        &self,
        driver: &D,
        extractor: &ResultPageExtractor,
        location: &str,
    ) -> Result<(Vec<JobRecord>, LocationCounts)> {
        let mut records = Vec::new();
        let mut counts = LocationCounts::default();
        let mut page = 1usize;

        loop {
            info!("Scraping jobs in {} (page {})", location, page);

            let entries = extractor.extract(driver).await?;
            counts.considered += entries.len() as u64;

            for entry in entries {
                if matcher::matches(&entry) {
                    counts.chosen += 1;
                    records.push(JobRecord::from(entry));
                }
            }

            if page >= self.max_pages {
                warn!(
                    "Reached the page ceiling ({}) for {}; stopping the walk",
                    self.max_pages, location
                );
                break;
            }

            match driver.click(NEXT_BUTTON).await {
                Ok(true) => {
                    page += 1;
                    driver.settle(self.page_settle).await;
                }
                Ok(false) => {
                    info!("No more pages to scrape for {}.", location);
                    break;
                }
                Err(e) => {
                    // Activation failure ends the walk the same way absence does
                    debug!("Next-page control failed for {}: {:#}", location, e);
                    info!("No more pages to scrape for {}.", location);
                    break;
                }
            }
        }

        Ok((records, counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::page_driver::testing::{FakeDriver, FakePage};
    use serde_json::{json, Value};

    fn card(title: &str, link: &str) -> Value {
        json!({"title": title, "company": "Acme", "location": "Remote", "link": link})
    }

    fn walker(max_pages: usize) -> PaginationWalker {
        PaginationWalker::new(Duration::ZERO, max_pages)
    }

    #[tokio::test]
    async fn two_pages_three_considered_one_chosen() {
        let driver = FakeDriver::with_pages(
            NEXT_BUTTON,
            vec![
                FakePage {
                    cards: json!([
                        card("Backend Engineer", "https://x.test/1"),
                        card("Engineer - Visa Sponsorship", "https://x.test/2"),
                    ]),
                    has_next: true,
                },
                FakePage {
                    cards: json!([card("Director, Relocation", "https://x.test/3")]),
                    has_next: false,
                },
            ],
        );

        let extractor = ResultPageExtractor::new();
        let (records, counts) = walker(100)
            .walk(&driver, &extractor, "Germany")
            .await
            .unwrap();

        assert_eq!(counts.considered, 3);
        // "Director, Relocation" contains neither keyword
        assert_eq!(counts.chosen, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Engineer - Visa Sponsorship");
        assert!(counts.chosen <= counts.considered);
    }

    #[tokio::test]
    async fn records_keep_page_then_card_order() {
        let driver = FakeDriver::with_pages(
            NEXT_BUTTON,
            vec![
                FakePage {
                    cards: json!([
                        card("Visa role B", "https://x.test/b"),
                        card("Visa role A", "https://x.test/a"),
                    ]),
                    has_next: true,
                },
                FakePage {
                    cards: json!([card("Sponsorship role C", "https://x.test/c")]),
                    has_next: false,
                },
            ],
        );

        let extractor = ResultPageExtractor::new();
        let (records, counts) = walker(100)
            .walk(&driver, &extractor, "Spain")
            .await
            .unwrap();

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Visa role B", "Visa role A", "Sponsorship role C"]);
        assert_eq!(counts.chosen, 3);
        assert_eq!(counts.considered, 3);
    }

    #[tokio::test]
    async fn page_ceiling_stops_an_endless_next_control() {
        // Every page advertises a next page; the ceiling must cut the walk.
        let pages = (0..10)
            .map(|i| FakePage {
                cards: json!([card("Backend Engineer", &format!("https://x.test/{i}"))]),
                has_next: true,
            })
            .collect();
        let driver = FakeDriver::with_pages(NEXT_BUTTON, pages);

        let extractor = ResultPageExtractor::new();
        let (_, counts) = walker(3)
            .walk(&driver, &extractor, "UK")
            .await
            .unwrap();

        assert_eq!(counts.considered, 3);
        assert_eq!(driver.count_actions("extract"), 3);
    }

    #[tokio::test]
    async fn failing_next_control_ends_the_walk_cleanly() {
        // The control advertises a next page but errors when activated;
        // the walk must finish with the current page's results intact.
        let driver = FakeDriver::with_pages(
            NEXT_BUTTON,
            vec![
                FakePage {
                    cards: json!([card("Visa role", "https://x.test/1")]),
                    has_next: true,
                },
                FakePage {
                    cards: json!([card("Sponsorship role", "https://x.test/2")]),
                    has_next: false,
                },
            ],
        );
        driver.fail_click(NEXT_BUTTON);

        let extractor = ResultPageExtractor::new();
        let (records, counts) = walker(100)
            .walk(&driver, &extractor, "Ireland")
            .await
            .unwrap();

        assert_eq!(counts.considered, 1);
        assert_eq!(counts.chosen, 1);
        assert_eq!(records[0].title, "Visa role");
        assert_eq!(driver.count_actions("extract"), 1);
    }

    #[tokio::test]
    async fn single_page_without_next_is_done_immediately() {
        let driver = FakeDriver::with_pages(
            NEXT_BUTTON,
            vec![FakePage {
                cards: json!([]),
                has_next: false,
            }],
        );

        let extractor = ResultPageExtractor::new();
        let (records, counts) = walker(100)
            .walk(&driver, &extractor, "Canada")
            .await
            .unwrap();

        assert!(records.is_empty());
        assert_eq!(counts, LocationCounts::default());
        assert_eq!(driver.count_actions("extract"), 1);
    }
}

//! Per-location run
//!
//! Submits the base query + location search, applies the filters, then hands
//! the page over to the pagination walk. Filter problems are logged and the
//! run continues; driver failures while submitting the search are fatal and
//! propagate.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::infrastructure::PageDriver;
use crate::models::{JobRecord, LocationCounts, SearchFacets};
use crate::services::{FilterApplier, FilterOutcome, ResultPageExtractor};
use crate::workflow::PaginationWalker;

const JOBS_URL: &str = "https://www.linkedin.com/jobs/";
const SEARCH_BOX: &str = "input[placeholder='Search jobs']";
const LOCATION_BOX: &str = "input[placeholder='Search location']";

const JOBS_PAGE_SETTLE: Duration = Duration::from_secs(2);

pub struct LocationRunner {
    filter: FilterApplier,
    extractor: ResultPageExtractor,
    walker: PaginationWalker,
    results_settle: Duration,
}

impl LocationRunner {
    pub fn new(config: &Config) -> Self {
        Self {
            filter: FilterApplier::new(Duration::from_millis(config.filter_settle_ms)),
            extractor: ResultPageExtractor::new(),
            walker: PaginationWalker::new(
                Duration::from_millis(config.page_settle_ms),
                config.max_pages_per_location,
            ),
            results_settle: Duration::from_millis(config.results_settle_ms),
        }
    }

    /// Run the full search for one location and return its records and
    /// counters unchanged from the walk.
    pub async fn run<D: PageDriver>(
        &self,
        driver: &D,
        facets: &SearchFacets,
    ) -> Result<(Vec<JobRecord>, LocationCounts)> {
        info!("Searching jobs in {}", facets.location);

        driver.navigate(JOBS_URL).await?;
        driver.settle(JOBS_PAGE_SETTLE).await;

        driver.type_text(SEARCH_BOX, &facets.search_query).await?;
        driver.type_text(LOCATION_BOX, &facets.location).await?;
        driver.press_enter(LOCATION_BOX).await?;

        // Wait for the initial results to load
        driver.settle(self.results_settle).await;

        match self.filter.apply(driver, facets).await {
            FilterOutcome::Applied => debug!("Filters applied for {}", facets.location),
            FilterOutcome::PartiallyApplied(reasons) => {
                for reason in &reasons {
                    warn!("Filter partially applied for {}: {}", facets.location, reason);
                }
            }
            FilterOutcome::Failed(reasons) => {
                warn!(
                    "Filters not applied for {}: {}",
                    facets.location,
                    reasons.join("; ")
                );
            }
        }

        self.walker
            .walk(driver, &self.extractor, &facets.location)
            .await
    }
}

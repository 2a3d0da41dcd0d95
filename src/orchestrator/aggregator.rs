//! Run aggregation
//!
//! Runs every location in submission order and merges the per-location
//! results into one combined record sequence and run-wide totals. Counters
//! flow up unmodified — nothing is re-derived, reordered or deduplicated
//! here. The first fatal location error aborts the remaining locations, but
//! everything accumulated so far is still returned.

use anyhow::Error;
use tracing::{error, info};

use crate::infrastructure::PageDriver;
use crate::models::{JobRecord, RunTotals, SearchFacets};
use crate::workflow::LocationRunner;

/// The merged result of a run, possibly partial.
pub struct RunOutcome {
    /// Combined records: location order, then page order, then card order.
    pub records: Vec<JobRecord>,
    pub totals: RunTotals,
    /// The fatal error that cut the run short, if any.
    pub failure: Option<Error>,
}

/// Run each facet set in order and merge the results.
pub async fn aggregate<D: PageDriver>(
    driver: &D,
    runner: &LocationRunner,
    locations: &[SearchFacets],
) -> RunOutcome {
    let mut records = Vec::new();
    let mut totals = RunTotals::default();
    let mut failure = None;

    for facets in locations {
        match runner.run(driver, facets).await {
            Ok((location_records, counts)) => {
                info!("Finished scraping {}.", facets.location);
                info!(
                    "Jobs considered: {}, jobs chosen: {}",
                    counts.considered, counts.chosen
                );
                records.extend(location_records);
                totals.absorb(&counts);
            }
            Err(e) => {
                error!(
                    "Fatal error while scraping {}: {:#}; aborting remaining locations",
                    facets.location, e
                );
                failure = Some(e);
                break;
            }
        }
    }

    RunOutcome {
        records,
        totals,
        failure,
    }
}

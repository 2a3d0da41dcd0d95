//! Search-filter application
//!
//! Translates a `SearchFacets` value into actions against the filter UI.
//! Nothing here is fatal: every failed action is collected into the returned
//! `FilterOutcome` and the run continues with whatever filter state the page
//! ended up in. No retries.

use std::time::Duration;

use tracing::debug;

use crate::infrastructure::PageDriver;
use crate::models::SearchFacets;

const EXPERIENCE_FILTER_BUTTON: &str = "button[aria-label='Experience Level filter. \
Clicking this button displays all Experience Level filter options.']";
const DATE_FILTER_BUTTON: &str = "button[aria-label='Date Posted filter. \
Clicking this button displays all Date Posted filter options.']";
const APPLY_FILTERS_BUTTON: &str = "button[aria-label='Apply current filters']";

/// How applying the facets went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Every filter action succeeded.
    Applied,
    /// Some actions failed; the reasons name the offending facet values.
    PartiallyApplied(Vec<String>),
    /// No filter action succeeded.
    Failed(Vec<String>),
}

pub struct FilterApplier {
    settle: Duration,
}

impl FilterApplier {
    pub fn new(settle: Duration) -> Self {
        Self { settle }
    }

    /// Apply the experience-level and date-posted facets.
    ///
    /// Level activations are independent: one failing does not block the
    /// others, and the single "apply filters" confirmation is invoked
    /// exactly once after all levels were attempted — even when the level
    /// sequence is empty.
    pub async fn apply<D: PageDriver>(&self, driver: &D, facets: &SearchFacets) -> FilterOutcome {
        let mut attempted = 0usize;
        let mut reasons = Vec::new();

        // Experience-level facet: open the control, activate each level,
        // confirm once.
        attempted += 1;
        match driver.click(EXPERIENCE_FILTER_BUTTON).await {
            Ok(true) => driver.settle(self.settle).await,
            Ok(false) => reasons.push("experience-level filter control not found".to_string()),
            Err(e) => reasons.push(format!("experience-level filter control: {e:#}")),
        }

        for level in &facets.experience_levels {
            attempted += 1;
            match driver.click_text(level).await {
                Ok(true) => {
                    debug!("Activated experience level '{}'", level);
                    driver.settle(self.settle).await;
                }
                Ok(false) => reasons.push(format!("experience level '{level}' not found")),
                Err(e) => reasons.push(format!("experience level '{level}': {e:#}")),
            }
        }

        attempted += 1;
        match driver.click(APPLY_FILTERS_BUTTON).await {
            Ok(true) => driver.settle(self.settle).await,
            Ok(false) => reasons.push("apply-filters control not found".to_string()),
            Err(e) => reasons.push(format!("apply-filters control: {e:#}")),
        }

        // Date-posted facet: exactly one option, unless no window was asked.
        if let Some(label) = facets.date_posted.ui_label() {
            attempted += 1;
            match driver.click(DATE_FILTER_BUTTON).await {
                Ok(true) => driver.settle(self.settle).await,
                Ok(false) => reasons.push("date-posted filter control not found".to_string()),
                Err(e) => reasons.push(format!("date-posted filter control: {e:#}")),
            }

            attempted += 1;
            match driver.click_text(label).await {
                Ok(true) => {
                    debug!("Activated date-posted option '{}'", label);
                    driver.settle(self.settle).await;
                }
                Ok(false) => reasons.push(format!("date-posted option '{label}' not found")),
                Err(e) => reasons.push(format!("date-posted option '{label}': {e:#}")),
            }
        }

        if reasons.is_empty() {
            FilterOutcome::Applied
        } else if reasons.len() >= attempted {
            FilterOutcome::Failed(reasons)
        } else {
            FilterOutcome::PartiallyApplied(reasons)
        }
    }
}

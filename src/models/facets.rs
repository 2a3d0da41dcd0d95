//! Search facets
//!
//! One `SearchFacets` value describes a single location's query. Facets are
//! passed by value and never mutated after construction.

use serde::Deserialize;

/// Recency window for the "Date Posted" filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DatePosted {
    PastDay,
    #[default]
    PastWeek,
    PastMonth,
    /// No date filter applied.
    Any,
}

impl DatePosted {
    /// The literal label the filter UI uses for this window.
    ///
    /// `Any` has no label: the date-posted control is skipped entirely.
    pub fn ui_label(&self) -> Option<&'static str> {
        match self {
            DatePosted::PastDay => Some("Past 24 hours"),
            DatePosted::PastWeek => Some("Past Week"),
            DatePosted::PastMonth => Some("Past Month"),
            DatePosted::Any => None,
        }
    }
}

/// The full query description for one location.
#[derive(Debug, Clone)]
pub struct SearchFacets {
    pub location: String,
    pub experience_levels: Vec<String>,
    pub date_posted: DatePosted,
    pub search_query: String,
}

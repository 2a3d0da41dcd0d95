use std::fs;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{DatePosted, SearchFacets};

/// Program configuration
///
/// Loaded once at startup from a JSON file. `username` and `password` are
/// required and treated as opaque credentials; everything else falls back to
/// the reference run's defaults.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Login username
    pub username: String,
    /// Login password
    pub password: String,
    /// Locations to search, in submission order
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
    /// Experience-level filter options, applied to every location
    #[serde(default = "default_experience_levels")]
    pub experience_levels: Vec<String>,
    /// Date-posted filter window, applied to every location
    #[serde(default)]
    pub date_posted: DatePosted,
    /// Base search query
    #[serde(default = "default_search_query")]
    pub search_query: String,
    /// CSV output path
    #[serde(default = "default_csv_output")]
    pub csv_output: String,
    /// Spreadsheet output path
    #[serde(default = "default_xlsx_output")]
    pub xlsx_output: String,
    /// Ceiling on pages walked per location
    #[serde(default = "default_max_pages")]
    pub max_pages_per_location: usize,
    /// Settle wait after submitting a search (ms)
    #[serde(default = "default_results_settle_ms")]
    pub results_settle_ms: u64,
    /// Settle wait after moving to the next result page (ms)
    #[serde(default = "default_page_settle_ms")]
    pub page_settle_ms: u64,
    /// Settle wait after a filter-UI action (ms)
    #[serde(default = "default_filter_settle_ms")]
    pub filter_settle_ms: u64,
}

fn default_locations() -> Vec<String> {
    [
        "Venezuela",
        "Latin America",
        "Germany",
        "Spain",
        "UK",
        "Ireland",
        "Netherlands",
        "United States",
        "Canada",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_experience_levels() -> Vec<String> {
    vec!["Mid-Senior".to_string(), "Director".to_string()]
}

fn default_search_query() -> String {
    "relocation work visa sponsorship".to_string()
}

fn default_csv_output() -> String {
    "linkedin_jobs.csv".to_string()
}

fn default_xlsx_output() -> String {
    "linkedin_jobs.xlsx".to_string()
}

fn default_max_pages() -> usize {
    100
}

fn default_results_settle_ms() -> u64 {
    5000
}

fn default_page_settle_ms() -> u64 {
    5000
}

fn default_filter_settle_ms() -> u64 {
    1000
}

impl Config {
    /// Load the configuration from a JSON file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| AppError::config_read_failed(path, e))?;
        serde_json::from_str(&contents).map_err(|e| AppError::config_parse_failed(path, e))
    }

    /// The ordered facet sets for this run: one per location, sharing the
    /// same experience levels, date window and query.
    pub fn facets(&self) -> Vec<SearchFacets> {
        self.locations
            .iter()
            .map(|location| SearchFacets {
                location: location.clone(),
                experience_levels: self.experience_levels.clone(),
                date_posted: self.date_posted,
                search_query: self.search_query.clone(),
            })
            .collect()
    }
}

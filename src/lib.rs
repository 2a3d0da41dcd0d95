//! # LinkedIn Job Finder
//!
//! Automates a job-board search with a real browser session: log in, search
//! each target location, apply the experience-level and date-posted filters,
//! walk every result page, keep the jobs whose title mentions visa
//! sponsorship, and export the combined set to CSV and spreadsheet.
//!
//! ## Architecture
//!
//! Four layers, depending strictly downward:
//!
//! ```text
//! orchestrator (App lifecycle, location aggregation, totals)
//!     ↓
//! workflow (LocationRunner, PaginationWalker)
//!     ↓
//! services (login / filters / extraction / criterion / export)
//!     ↓
//! infrastructure (PageDriver - the one page-session capability)
//! ```
//!
//! Only the orchestrator holds the `Browser`; everything below consumes the
//! [`infrastructure::PageDriver`] trait, so the pipeline runs against any
//! backend that satisfies it.

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod workflow;

pub use browser::launch_headless_browser;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{CdpDriver, PageDriver};
pub use models::{DatePosted, JobRecord, LocationCounts, RawJobEntry, RunTotals, SearchFacets};
pub use orchestrator::{aggregate, App, RunOutcome};
pub use services::{ExportSink, FilterApplier, FilterOutcome, LoginService, ResultPageExtractor};
pub use workflow::{LocationRunner, PaginationWalker};

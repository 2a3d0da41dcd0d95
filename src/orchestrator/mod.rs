//! Orchestration layer
//!
//! `aggregate` loops the locations and merges their results; `App` owns the
//! run lifecycle (browser acquisition, login, export, summary, release).
//! Only this layer holds the `Browser` and the concrete driver.

pub mod aggregator;
pub mod app;

pub use aggregator::{aggregate, RunOutcome};
pub use app::App;

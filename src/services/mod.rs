//! Capability layer
//!
//! Each service exposes one capability against the page session or the
//! filesystem and knows nothing about the location/pagination flow:
//! - `LoginService` - authenticate the session
//! - `FilterApplier` - translate search facets into filter-UI actions
//! - `ResultPageExtractor` - snapshot the rendered job cards
//! - `matcher` - the pure inclusion criterion
//! - `ExportSink` - write the combined records to CSV and spreadsheet

pub mod export;
pub mod extractor;
pub mod filter;
pub mod login;
pub mod matcher;

pub use export::ExportSink;
pub use extractor::ResultPageExtractor;
pub use filter::{FilterApplier, FilterOutcome};
pub use login::LoginService;

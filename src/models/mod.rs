pub mod counts;
pub mod facets;
pub mod job;

pub use counts::{LocationCounts, RunTotals};
pub use facets::{DatePosted, SearchFacets};
pub use job::{JobRecord, RawJobEntry};

//! Flow layer
//!
//! `PaginationWalker` walks one location's result pages; `LocationRunner`
//! wires search submission, filter application and the walk together for a
//! single location. Neither holds the page resource — both take the driver
//! capability as a parameter.

pub mod location;
pub mod pagination;

pub use location::LocationRunner;
pub use pagination::PaginationWalker;

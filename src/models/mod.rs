//! Boundary models
//!
//! Result shapes handed from the validator to the line-command driver.

pub mod reply;
pub mod report;

// Re-export commonly used types
pub use reply::Reply;
pub use report::StatsReport;

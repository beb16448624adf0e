//! Results aggregation and reporting module
//!
//! Groups test outcomes by feature category and renders compatibility reports.

mod aggregate;
mod report;

pub use aggregate::aggregate;
pub use report::{write_report, ReportFormat, ReportGenerator};

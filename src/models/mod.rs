//! Data models for S3 compatibility reporting
//!
//! This module contains all data structures used throughout the application.

mod category;
mod outcome;

pub use category::Category;
pub use outcome::{percentage, Summary, SummarySource, TestOutcome, TestStatus};

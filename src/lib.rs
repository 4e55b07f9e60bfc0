//! Liquor Sales - CSV cleanup, aggregation & scatter viewer
//!
//! Reads liquor store sales records, fills in missing values, totals bottles
//! per zip code and dollars per store, writes the cleaned table back out and
//! can show a scatter plot of the result.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod stats;

pub use config::PipelineConfig;
pub use pipeline::{run, PipelineError, RunSummary};

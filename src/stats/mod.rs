//! Stats module - grouped sales totals

mod aggregator;

pub use aggregator::{AggregateError, AggregationResult, Aggregator};

//! Sales Aggregator Module
//! Grouped sums of the normalized table using Polars lazy queries.

use crate::data::{SalesTable, BOTTLES_SOLD, SALE_DOLLARS, STORE_NAME, ZIP_CODE};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing column '{0}' required for aggregation")]
    MissingColumn(String),
}

/// Summed values per grouping key, largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub label: String,
    pub key_column: String,
    pub value_column: String,
    pub entries: Vec<(String, f64)>,
}

impl AggregationResult {
    /// Sum over every group.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes grouped totals over a normalized table.
pub struct Aggregator;

impl Aggregator {
    /// Total bottles sold per zip code.
    pub fn by_zip(table: &SalesTable) -> Result<AggregationResult, AggregateError> {
        let result = Self::group_sum(
            table,
            ZIP_CODE,
            BOTTLES_SOLD,
            "Total Bottles Sold per Zip Code",
        )?;
        log::info!("Aggregated total bottles sold per zip code ({} groups).", result.len());
        Ok(result)
    }

    /// Total sales dollars per store.
    pub fn by_store(table: &SalesTable) -> Result<AggregationResult, AggregateError> {
        let result = Self::group_sum(
            table,
            STORE_NAME,
            SALE_DOLLARS,
            "Total Sales Dollars per Store",
        )?;
        log::info!("Aggregated total sales dollars per store ({} groups).", result.len());
        Ok(result)
    }

    /// Sum `value` per distinct `key`, sorted by the sum descending.
    ///
    /// Groups with equal sums keep the order in which their key first appears.
    /// Rows with a missing key are left out.
    pub fn group_sum(
        table: &SalesTable,
        key: &str,
        value: &str,
        label: &str,
    ) -> Result<AggregationResult, AggregateError> {
        for name in [key, value] {
            if !table.has_column(name) {
                let err = AggregateError::MissingColumn(name.to_string());
                log::error!("{err}");
                return Err(err);
            }
        }

        let grouped = table
            .frame()
            .clone()
            .lazy()
            .filter(col(key).is_not_null())
            .group_by_stable([col(key)])
            .agg([col(value).sum()])
            .sort_by_exprs(
                [col(value)],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        let keys = grouped.column(key)?.cast(&DataType::String)?;
        let sums = grouped.column(value)?.cast(&DataType::Float64)?;

        let entries = keys
            .str()?
            .into_iter()
            .zip(sums.f64()?.into_iter())
            .filter_map(|(k, v)| Some((k?.to_string(), v.unwrap_or(0.0))))
            .collect();

        Ok(AggregationResult {
            label: label.to_string(),
            key_column: key.to_string(),
            value_column: value.to_string(),
            entries,
        })
    }
}

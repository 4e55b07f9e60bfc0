//! Sales Table Module
//! Column names and the in-memory table handed from step to step.

use polars::prelude::*;

/// Postal code column, the grouping key for bottle totals.
pub const ZIP_CODE: &str = "zip_code";
/// Store name column, the grouping key for dollar totals.
pub const STORE_NAME: &str = "store_name";
/// Quantity sold.
pub const BOTTLES_SOLD: &str = "bottles_sold";
/// Revenue amount.
pub const SALE_DOLLARS: &str = "sale_dollars";

/// A single sales row, used to build tables in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesRecord {
    pub zip_code: Option<String>,
    pub store_name: Option<String>,
    pub bottles_sold: Option<f64>,
    pub sale_dollars: Option<f64>,
}

impl SalesRecord {
    pub fn new(zip_code: &str, store_name: &str, bottles_sold: f64, sale_dollars: f64) -> Self {
        Self {
            zip_code: Some(zip_code.to_string()),
            store_name: Some(store_name.to_string()),
            bottles_sold: Some(bottles_sold),
            sale_dollars: Some(sale_dollars),
        }
    }
}

/// Ordered sales rows sharing one column schema.
///
/// Owned by exactly one pipeline step at a time; steps take it by value and
/// hand a new table to the next step.
#[derive(Debug, Clone)]
pub struct SalesTable {
    df: DataFrame,
}

impl SalesTable {
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Build a table with the four sales columns from typed rows.
    pub fn from_records(records: &[SalesRecord]) -> PolarsResult<Self> {
        let zip: Vec<Option<String>> = records.iter().map(|r| r.zip_code.clone()).collect();
        let store: Vec<Option<String>> = records.iter().map(|r| r.store_name.clone()).collect();
        let bottles: Vec<Option<f64>> = records.iter().map(|r| r.bottles_sold).collect();
        let dollars: Vec<Option<f64>> = records.iter().map(|r| r.sale_dollars).collect();

        let df = DataFrame::new(vec![
            Column::new(ZIP_CODE.into(), zip),
            Column::new(STORE_NAME.into(), store),
            Column::new(BOTTLES_SOLD.into(), bottles),
            Column::new(SALE_DOLLARS.into(), dollars),
        ])?;

        Ok(Self::new(df))
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn into_frame(self) -> DataFrame {
        self.df
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.get_column_index(name).is_some()
    }

    /// Values of a column cast to `f64`, nulls kept as `None`.
    pub fn values_f64(&self, name: &str) -> PolarsResult<Vec<Option<f64>>> {
        let column = self.df.column(name)?.cast(&DataType::Float64)?;
        Ok(column.f64()?.into_iter().collect())
    }

    /// Values of a column rendered as text, nulls kept as `None`.
    pub fn values_text(&self, name: &str) -> PolarsResult<Vec<Option<String>>> {
        let column = self.df.column(name)?.cast(&DataType::String)?;
        Ok(column
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect())
    }

    /// Number of missing values in a column, zero when the column is absent.
    pub fn null_count(&self, name: &str) -> usize {
        self.df
            .column(name)
            .map(|col| col.null_count())
            .unwrap_or(0)
    }
}

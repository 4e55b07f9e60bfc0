//! Data Normalizer Module
//! Coerces column types and fills missing sales values.

use super::{SalesTable, BOTTLES_SOLD, SALE_DOLLARS, ZIP_CODE};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Invalid zip code {value:?} at row {row}")]
    InvalidZipCode { row: usize, value: String },
}

/// How postal codes are stored once coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipFormat {
    /// Int64 column. Leading zeros are dropped ("00501" becomes 501).
    Integer,
    /// Five-digit zero-padded text ("00501" stays "00501").
    ZeroPadded,
}

impl Default for ZipFormat {
    fn default() -> Self {
        ZipFormat::Integer
    }
}

/// Handles type coercion and missing-value filling.
pub struct Normalizer;

impl Normalizer {
    /// Normalize a raw table.
    ///
    /// `zip_code` is coerced when present and skipped with a warning when
    /// absent. Missing or NaN `bottles_sold` and `sale_dollars` become zero and both
    /// columns become Float64. Other columns are left as loaded.
    pub fn normalize(
        table: SalesTable,
        zip_format: ZipFormat,
    ) -> Result<SalesTable, NormalizeError> {
        Self::apply(table, zip_format)
            .inspect_err(|err| log::error!("Normalization failed: {err}"))
    }

    fn apply(table: SalesTable, zip_format: ZipFormat) -> Result<SalesTable, NormalizeError> {
        let mut df = table.into_frame();

        if df.get_column_index(ZIP_CODE).is_some() {
            let codes = Self::coerce_zip_codes(&df, zip_format)?;
            df.with_column(codes)?;
            match zip_format {
                ZipFormat::Integer => log::info!("Converted '{ZIP_CODE}' to integer type."),
                ZipFormat::ZeroPadded => {
                    log::info!("Converted '{ZIP_CODE}' to zero-padded integer text.")
                }
            }
        } else {
            log::warn!("'{ZIP_CODE}' column not found in data.");
        }

        for name in [BOTTLES_SOLD, SALE_DOLLARS] {
            if df.get_column_index(name).is_none() {
                log::warn!("'{name}' column not found in data, nothing to fill.");
                continue;
            }

            let values = df.column(name)?.strict_cast(&DataType::Float64)?;
            let mut missing = 0usize;
            let filled: Float64Chunked = values
                .f64()?
                .into_iter()
                .map(|v| match v {
                    Some(v) if !v.is_nan() => Some(v),
                    _ => {
                        missing += 1;
                        Some(0.0)
                    }
                })
                .collect();
            df.with_column(filled.with_name(name.into()).into_series())?;

            if missing > 0 {
                log::debug!("Filled {missing} missing '{name}' values with 0.");
            }
        }
        log::info!("Filled missing values in '{BOTTLES_SOLD}' and '{SALE_DOLLARS}' with zeros.");

        Ok(SalesTable::new(df))
    }

    fn coerce_zip_codes(df: &DataFrame, zip_format: ZipFormat) -> Result<Column, NormalizeError> {
        let text = df.column(ZIP_CODE)?.cast(&DataType::String)?;
        let raw = text.str()?;

        let mut codes: Vec<i64> = Vec::with_capacity(raw.len());
        let mut leading_zeros = 0usize;

        for (row, value) in raw.into_iter().enumerate() {
            let value = value.unwrap_or("");
            let code = parse_zip(value).ok_or_else(|| NormalizeError::InvalidZipCode {
                row,
                value: value.to_string(),
            })?;
            if has_leading_zero(value) {
                leading_zeros += 1;
            }
            codes.push(code);
        }

        let column = match zip_format {
            ZipFormat::Integer => {
                if leading_zeros > 0 {
                    log::warn!(
                        "{leading_zeros} zip codes had leading zeros that the integer format drops."
                    );
                }
                Column::new(ZIP_CODE.into(), codes)
            }
            ZipFormat::ZeroPadded => {
                let padded: Vec<String> = codes.iter().map(|code| format!("{code:05}")).collect();
                Column::new(ZIP_CODE.into(), padded)
            }
        };
        Ok(column)
    }
}

/// Parse a postal code, accepting integral float text such as "55401.0".
fn parse_zip(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(code) = value.parse::<i64>() {
        return (code >= 0).then_some(code);
    }

    let code: f64 = value.parse().ok()?;
    (code.is_finite() && code >= 0.0 && code.fract() == 0.0 && code <= i64::MAX as f64)
        .then_some(code as i64)
}

fn has_leading_zero(value: &str) -> bool {
    let value = value.trim();
    value.len() > 1 && value.starts_with('0') && !value.starts_with("0.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SalesRecord, STORE_NAME};

    fn scenario_table() -> SalesTable {
        SalesTable::from_records(&[
            SalesRecord::new("55401", "A", 10.0, 100.0),
            SalesRecord {
                sale_dollars: None,
                ..SalesRecord::new("55401", "B", 5.0, 0.0)
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_fills_missing_values_with_zero() {
        let table = Normalizer::normalize(scenario_table(), ZipFormat::Integer).unwrap();

        assert_eq!(
            table.values_f64(BOTTLES_SOLD).unwrap(),
            vec![Some(10.0), Some(5.0)]
        );
        assert_eq!(
            table.values_f64(SALE_DOLLARS).unwrap(),
            vec![Some(100.0), Some(0.0)]
        );
        assert_eq!(table.null_count(BOTTLES_SOLD), 0);
        assert_eq!(table.null_count(SALE_DOLLARS), 0);
    }

    #[test]
    fn test_nan_values_become_zero() {
        let raw = SalesTable::from_records(&[
            SalesRecord::new("55401", "A", f64::NAN, f64::NAN),
            SalesRecord::new("55401", "B", 2.0, 3.0),
        ])
        .unwrap();
        let table = Normalizer::normalize(raw, ZipFormat::Integer).unwrap();

        assert_eq!(
            table.values_f64(BOTTLES_SOLD).unwrap(),
            vec![Some(0.0), Some(2.0)]
        );
        assert_eq!(
            table.values_f64(SALE_DOLLARS).unwrap(),
            vec![Some(0.0), Some(3.0)]
        );
    }

    #[test]
    fn test_non_numeric_quantity_is_rejected() {
        let df = DataFrame::new(vec![
            Column::new(ZIP_CODE.into(), ["55401", "55401"]),
            Column::new(STORE_NAME.into(), ["A", "B"]),
            Column::new(BOTTLES_SOLD.into(), ["10", "a dozen"]),
            Column::new(SALE_DOLLARS.into(), ["100", "20"]),
        ])
        .unwrap();

        let err = Normalizer::normalize(SalesTable::new(df), ZipFormat::Integer).unwrap_err();
        assert!(matches!(err, NormalizeError::PolarsError(_)));
    }

    #[test]
    fn test_non_numeric_revenue_is_rejected() {
        let df = DataFrame::new(vec![
            Column::new(ZIP_CODE.into(), ["55401"]),
            Column::new(STORE_NAME.into(), ["A"]),
            Column::new(BOTTLES_SOLD.into(), ["10"]),
            Column::new(SALE_DOLLARS.into(), ["$100"]),
        ])
        .unwrap();

        let err = Normalizer::normalize(SalesTable::new(df), ZipFormat::Integer).unwrap_err();
        assert!(matches!(err, NormalizeError::PolarsError(_)));
    }

    #[test]
    fn test_zip_code_becomes_integer() {
        let table = Normalizer::normalize(scenario_table(), ZipFormat::Integer).unwrap();
        let zip = table.frame().column(ZIP_CODE).unwrap();

        assert_eq!(zip.dtype(), &DataType::Int64);
        assert_eq!(
            zip.i64().unwrap().into_iter().collect::<Vec<_>>(),
            vec![Some(55401), Some(55401)]
        );
    }

    #[test]
    fn test_missing_zip_column_is_skipped() {
        let mut df = scenario_table().into_frame();
        let _ = df.drop_in_place(ZIP_CODE).unwrap();

        let table = Normalizer::normalize(SalesTable::new(df), ZipFormat::Integer).unwrap();

        assert!(!table.has_column(ZIP_CODE));
        assert_eq!(table.null_count(SALE_DOLLARS), 0);
        assert_eq!(table.column_names(), vec![STORE_NAME, BOTTLES_SOLD, SALE_DOLLARS]);
    }

    #[test]
    fn test_leading_zero_formats() {
        let raw = SalesTable::from_records(&[SalesRecord::new("00501", "A", 1.0, 1.0)]).unwrap();

        let integer = Normalizer::normalize(raw.clone(), ZipFormat::Integer).unwrap();
        assert_eq!(integer.values_text(ZIP_CODE).unwrap(), vec![Some("501".to_string())]);

        let padded = Normalizer::normalize(raw, ZipFormat::ZeroPadded).unwrap();
        assert_eq!(padded.values_text(ZIP_CODE).unwrap(), vec![Some("00501".to_string())]);
    }

    #[test]
    fn test_non_numeric_zip_is_rejected() {
        let raw = SalesTable::from_records(&[
            SalesRecord::new("55401", "A", 1.0, 1.0),
            SalesRecord::new("N/A", "B", 1.0, 1.0),
        ])
        .unwrap();

        match Normalizer::normalize(raw, ZipFormat::Integer) {
            Err(NormalizeError::InvalidZipCode { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "N/A");
            }
            other => panic!("expected InvalidZipCode, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_zip() {
        assert_eq!(parse_zip("55401"), Some(55401));
        assert_eq!(parse_zip(" 55401.0 "), Some(55401));
        assert_eq!(parse_zip("00501"), Some(501));
        assert_eq!(parse_zip("55401.5"), None);
        assert_eq!(parse_zip("-1"), None);
        assert_eq!(parse_zip(""), None);
        assert!(has_leading_zero("00501"));
        assert!(!has_leading_zero("0"));
        assert!(!has_leading_zero("55401"));
    }
}

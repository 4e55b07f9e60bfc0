//! CSV Data Loader Module
//! Reads the raw sales CSV into a `SalesTable` using Polars.

use super::SalesTable;
use polars::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cell values read as missing, the same set pandas uses by default.
pub const MISSING_VALUE_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The file {} was not found", .0.display())]
    NotFound(PathBuf),
    #[error("No data found in the file {}", .0.display())]
    EmptyData(PathBuf),
    #[error("Failed to load CSV {}: {source}", path.display())]
    Load { path: PathBuf, source: LoadFailure },
}

/// Underlying cause of a `LoaderError::Load`.
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error(transparent)]
    Csv(#[from] PolarsError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Loads sales CSV files.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file with a header row.
    ///
    /// Every cell is read as text. Type coercion belongs to the normalizer, so
    /// leading zeros and extra columns reach it untouched. Cells matching
    /// `MISSING_VALUE_TOKENS` become nulls.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<SalesTable, LoaderError> {
        let path = path.as_ref();
        let table = Self::read(path).inspect_err(|err| log::error!("{err}"))?;

        log::info!(
            "Data successfully loaded from {} ({} rows, {} columns).",
            path.display(),
            table.height(),
            table.frame().width()
        );
        Ok(table)
    }

    fn read(path: &Path) -> Result<SalesTable, LoaderError> {
        let load_err = |source: LoadFailure| LoaderError::Load {
            path: path.to_path_buf(),
            source,
        };

        let blank = is_blank(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoaderError::NotFound(path.to_path_buf()),
            _ => load_err(source.into()),
        })?;
        if blank {
            return Err(LoaderError::EmptyData(path.to_path_buf()));
        }

        let null_values = MISSING_VALUE_TOKENS.iter().map(|t| (*t).into()).collect();
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_null_values(Some(NullValues::AllColumns(null_values)))
            .finish()
            .and_then(|lf| lf.collect())
            .map_err(|source| match source {
                PolarsError::NoData(_) => LoaderError::EmptyData(path.to_path_buf()),
                source => load_err(source.into()),
            })?;

        if df.height() == 0 {
            return Err(LoaderError::EmptyData(path.to_path_buf()));
        }

        Ok(SalesTable::new(df))
    }
}

/// True when the file holds nothing but whitespace.
fn is_blank(path: &Path) -> io::Result<bool> {
    let mut reader = BufReader::new(File::open(path)?);
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(true);
        }
        if buf.iter().any(|b| !b.is_ascii_whitespace()) {
            return Ok(false);
        }
        let consumed = buf.len();
        reader.consume(consumed);
    }
}

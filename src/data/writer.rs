//! CSV Data Writer Module
//! Persists a normalized table back to disk.

use super::SalesTable;
use polars::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to encode CSV for {}: {source}", path.display())]
    Encode { path: PathBuf, source: PolarsError },
}

/// Writes sales tables as CSV.
pub struct DataWriter;

impl DataWriter {
    /// Write `table` with a header row, replacing any file at `path`.
    ///
    /// A failed write leaves whatever the file system kept; nothing is rolled
    /// back.
    pub fn save_csv(table: &SalesTable, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        Self::write(table, path).inspect_err(|err| log::error!("{err}"))?;

        log::info!("Processed data saved to {}.", path.display());
        Ok(())
    }

    fn write(table: &SalesTable, path: &Path) -> Result<(), PersistError> {
        let write_err = |source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);

        let mut df = table.frame().clone();
        CsvWriter::new(&mut writer)
            .include_header(true)
            .finish(&mut df)
            .map_err(|source| PersistError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        writer.flush().map_err(write_err)
    }
}

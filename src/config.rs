//! Pipeline configuration.

use crate::data::ZipFormat;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "data/liquorstore1.csv";
pub const DEFAULT_OUTPUT: &str = "data/liquorstore_output.csv";

/// Where to read, where to write, and how to store zip codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub zip_format: ZipFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            zip_format: ZipFormat::default(),
        }
    }

    pub fn with_zip_format(mut self, zip_format: ZipFormat) -> Self {
        self.zip_format = zip_format;
        self
    }
}

//! Pipeline Runner
//! Load, normalize, aggregate, report, persist, then optionally plot.

use crate::charts::{ScatterPlot, ScatterSink, VisualizeError};
use crate::config::PipelineConfig;
use crate::data::{DataLoader, DataWriter, LoaderError, NormalizeError, Normalizer, PersistError};
use crate::report::Reporter;
use crate::stats::{AggregateError, AggregationResult, Aggregator};
use std::io::{self, Write};
use thiserror::Error;

/// Why a run was aborted.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error("Failed to print report: {0}")]
    Report(#[from] io::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error(transparent)]
    Visualize(#[from] VisualizeError),
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub by_zip: AggregationResult,
    pub by_store: AggregationResult,
    pub rows_written: usize,
    pub visualized: bool,
}

/// Run every step in order, stopping at the first failure.
///
/// The report goes to `out`. `decide` is asked once, after the output file is
/// written, whether to show the scatter plot through `sink`.
pub fn run<W, D, S>(
    config: &PipelineConfig,
    out: &mut W,
    decide: D,
    sink: &mut S,
) -> Result<RunSummary, PipelineError>
where
    W: Write,
    D: FnOnce() -> bool,
    S: ScatterSink + ?Sized,
{
    let raw = DataLoader::load_csv(&config.input)?;
    let table = Normalizer::normalize(raw, config.zip_format)?;

    let by_zip = Aggregator::by_zip(&table)?;
    let by_store = Aggregator::by_store(&table)?;

    Reporter::write_results(out, &[&by_zip, &by_store])
        .inspect_err(|err| log::error!("Failed to print report: {err}"))?;

    DataWriter::save_csv(&table, &config.output)?;

    let visualized = if decide() {
        let plot = ScatterPlot::bottles_by_zip(&table)?;
        sink.show(&plot)?;
        true
    } else {
        log::info!("Visualization skipped.");
        false
    };

    Ok(RunSummary {
        by_zip,
        by_store,
        rows_written: table.height(),
        visualized,
    })
}

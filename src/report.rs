//! Console Reporter
//! Formats aggregation results as aligned text.

use crate::stats::AggregationResult;
use std::io::{self, Write};

/// Writes aggregation results to a text stream.
pub struct Reporter;

impl Reporter {
    /// Write each result in order, separated by blank lines.
    pub fn write_results<W: Write>(out: &mut W, results: &[&AggregationResult]) -> io::Result<()> {
        for result in results {
            Self::write_result(out, result)?;
        }
        out.flush()
    }

    /// Label, key column header, one line per group, then a footer.
    pub fn write_result<W: Write>(out: &mut W, result: &AggregationResult) -> io::Result<()> {
        let values: Vec<String> = result.entries.iter().map(|(_, v)| format_value(*v)).collect();

        let key_width = result
            .entries
            .iter()
            .map(|(k, _)| k.chars().count())
            .chain(std::iter::once(result.key_column.chars().count()))
            .max()
            .unwrap_or(0);
        let value_width = values.iter().map(String::len).max().unwrap_or(0);

        writeln!(out)?;
        writeln!(out, "{}:", result.label)?;
        writeln!(out, "{}", result.key_column)?;
        for ((key, _), value) in result.entries.iter().zip(&values) {
            writeln!(out, "{key:<key_width$}    {value:>value_width$}")?;
        }
        writeln!(out, "Name: {}, groups: {}", result.value_column, result.len())
    }
}

/// Whole numbers print without decimals, everything else with two.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

//! Charts module - Chart rendering

mod scatter;

pub use scatter::{ScatterChart, ScatterPlot, VisualizeError, POINT_COLOR};

/// Somewhere a scatter plot can be shown.
///
/// The binary opens a native window; tests record what would have been drawn.
pub trait ScatterSink {
    fn show(&mut self, plot: &ScatterPlot) -> Result<(), VisualizeError>;
}

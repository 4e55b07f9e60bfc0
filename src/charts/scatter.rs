//! Scatter Chart Module
//! Bottles sold against zip code, drawn with egui_plot.

use crate::data::{SalesTable, BOTTLES_SOLD, ZIP_CODE};
use egui::{Color32, RichText};
use egui_plot::{Plot, PlotPoints, Points};
use polars::prelude::PolarsError;
use thiserror::Error;

/// Marker colour before transparency is applied.
pub const POINT_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue

#[derive(Error, Debug)]
pub enum VisualizeError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing column '{0}' required for the scatter plot")]
    MissingColumn(String),
    #[error("Failed to open plot window: {0}")]
    Window(String),
}

/// Everything needed to draw one scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
    /// Marker opacity, so overlapping points read darker.
    pub alpha: f32,
}

impl ScatterPlot {
    /// Zip code on x, bottles sold on y. Rows missing either value are skipped.
    pub fn bottles_by_zip(table: &SalesTable) -> Result<Self, VisualizeError> {
        for name in [ZIP_CODE, BOTTLES_SOLD] {
            if !table.has_column(name) {
                let err = VisualizeError::MissingColumn(name.to_string());
                log::error!("{err}");
                return Err(err);
            }
        }

        let xs = table.values_f64(ZIP_CODE)?;
        let ys = table.values_f64(BOTTLES_SOLD)?;
        let points = xs
            .into_iter()
            .zip(ys)
            .filter_map(|(x, y)| Some([x?, y?]))
            .collect();

        Ok(Self {
            title: "Bottles Sold per Zip Code".to_string(),
            x_label: "Zip Code".to_string(),
            y_label: "Bottles Sold".to_string(),
            points,
            alpha: 0.5,
        })
    }
}

/// Draws scatter plots into an egui `Ui`.
pub struct ScatterChart;

impl ScatterChart {
    pub fn draw(ui: &mut egui::Ui, plot: &ScatterPlot) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&plot.title).strong().size(18.0));
        });

        let points: PlotPoints = plot.points.iter().copied().collect();
        let color = POINT_COLOR.gamma_multiply(plot.alpha);

        Plot::new("scatter_bottles_by_zip")
            .x_axis_label(plot.x_label.clone())
            .y_axis_label(plot.y_label.clone())
            .show_grid(true)
            .allow_scroll(false)
            // Zip codes are identifiers, show them without separators or decimals
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .radius(3.0)
                        .filled(true)
                        .color(color)
                        .name(&plot.y_label),
                );
            });
    }
}

//! Scatter Plot Window
//! Native eframe window hosting a single scatter chart.

use crate::charts::{ScatterChart, ScatterPlot, ScatterSink, VisualizeError};
use eframe::egui;

const WINDOW_TITLE: &str = "Liquor Sales";

/// eframe app drawing one plot until the window is closed.
pub struct ScatterApp {
    plot: ScatterPlot,
}

impl ScatterApp {
    pub fn new(plot: ScatterPlot) -> Self {
        Self { plot }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScatterChart::draw(ui, &self.plot);
        });
    }
}

/// Shows plots in a blocking native window.
#[derive(Debug, Clone)]
pub struct NativeScatterWindow {
    pub inner_size: [f32; 2],
}

impl Default for NativeScatterWindow {
    fn default() -> Self {
        Self {
            inner_size: [1000.0, 600.0],
        }
    }
}

impl ScatterSink for NativeScatterWindow {
    fn show(&mut self, plot: &ScatterPlot) -> Result<(), VisualizeError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.inner_size)
                .with_title(&plot.title),
            ..Default::default()
        };

        let app = ScatterApp::new(plot.clone());
        eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
            .map_err(|err| VisualizeError::Window(err.to_string()))
            .inspect_err(|err| log::error!("{err}"))?;

        log::info!("Displayed scatter plot of bottles sold per zip code.");
        Ok(())
    }
}

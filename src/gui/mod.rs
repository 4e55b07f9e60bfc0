//! GUI module - Native plot window

mod scatter_window;

pub use scatter_window::{NativeScatterWindow, ScatterApp};

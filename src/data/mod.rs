//! Data module - CSV loading, normalization and persistence

mod loader;
mod normalizer;
mod table;
mod writer;

pub use loader::{DataLoader, LoaderError};
pub use normalizer::{NormalizeError, Normalizer, ZipFormat};
pub use table::{SalesRecord, SalesTable, BOTTLES_SOLD, SALE_DOLLARS, STORE_NAME, ZIP_CODE};
pub use writer::{DataWriter, PersistError};

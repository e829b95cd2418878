//! Export module for simulation results.
//!
//! # Architecture
//!
//! Exporting happens in two steps:
//!
//! 1. [`ExportTable`] assembles the time grid and the per-depth series into
//!    one row-aligned table, checking that every column has one value per
//!    time point.
//! 2. An [`Exporter`] serializes the table to text. Each format is an
//!    independent implementation in its own sub-module.
//!
//! The result is an [`ExportPayload`]: text plus the file name and MIME type
//! under which it is offered. Saving it is the caller's business.
//!
//! # Available formats
//!
//! | Format  | Module  | File name                       | MIME       |
//! |---------|---------|---------------------------------|------------|
//! | CSV     | [`csv`] | `contaminant_concentration.csv` | `text/csv` |
//!
//! # Usage example
//!
//! ```rust
//! use contam_rs::output::export::{CsvExporter, ExportTable, Exporter};
//! use contam_rs::physics::{ConcentrationSeries, TimeGrid};
//! use indexmap::IndexMap;
//!
//! let grid = TimeGrid::from_points(vec![1.0, 2.0]).unwrap();
//! let mut columns = IndexMap::new();
//! columns.insert("Depth 10 cm".to_string(), ConcentrationSeries::from_vec(vec![3.0, 4.0]));
//!
//! let table = ExportTable::from_columns(&grid, &columns).unwrap();
//! let payload = CsvExporter::default().payload(&table).unwrap();
//!
//! assert_eq!(payload.file_name, "contaminant_concentration.csv");
//! assert!(payload.body.starts_with("Time (days),Depth 10 cm\n"));
//! ```

pub mod csv;
pub mod table;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use csv::{CsvConfig, CsvExporter, CsvMetadata, Notation};
pub use table::ExportTable;

use crate::physics::{ConcentrationSeries, TimeGrid};
use indexmap::IndexMap;

/// File name under which the concentration table is offered
pub const EXPORT_FILE_NAME: &str = "contaminant_concentration.csv";

/// MIME type of the CSV payload
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Export failures
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("column '{label}' has {actual} values but the time grid has {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("column '{label}' holds a non-finite value at row {row}")]
    NonFinite { label: String, row: usize },

    #[error("column label must not be empty")]
    EmptyLabel,

    #[error("invalid export configuration: {0}")]
    InvalidConfig(String),

    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Serialized table together with its delivery metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Suggested file name
    pub file_name: String,

    /// MIME type of `body`
    pub mime_type: String,

    /// Serialized table
    pub body: String,
}

impl ExportPayload {
    /// Payload bytes (UTF-8)
    pub fn as_bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }

    /// Write the payload into `directory` under its file name
    ///
    /// Returns the path written.
    pub fn write_into(&self, directory: &Path) -> std::io::Result<PathBuf> {
        let path = directory.join(&self.file_name);
        std::fs::write(&path, self.as_bytes())?;
        Ok(path)
    }
}

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. It must
/// absorb `std::io::Error` so that [`export_to_path`](Exporter::export_to_path)
/// can be provided once for every format.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error + From<std::io::Error>;

    /// Serialize the table
    fn render(&self, table: &ExportTable) -> Result<String, Self::Error>;

    /// File name the output is offered under
    fn file_name(&self) -> &str;

    /// MIME type of the output
    fn mime_type(&self) -> &str;

    /// Serialize the table and attach delivery metadata
    fn payload(&self, table: &ExportTable) -> Result<ExportPayload, Self::Error> {
        Ok(ExportPayload {
            file_name: self.file_name().to_string(),
            mime_type: self.mime_type().to_string(),
            body: self.render(table)?,
        })
    }

    /// Serialize the table straight to a file
    fn export_to_path(&self, table: &ExportTable, path: &Path) -> Result<(), Self::Error> {
        let body = self.render(table)?;
        std::fs::write(path, body)?;
        Ok(())
    }
}

/// Export a time grid and its labeled series as CSV text with default settings
///
/// Columns appear in map insertion order after the `Time (days)` column.
///
/// # Errors
///
/// [`ExportError::LengthMismatch`] if any series length differs from the grid.
pub fn export_csv(
    grid: &TimeGrid,
    columns: &IndexMap<String, ConcentrationSeries>,
) -> Result<String, ExportError> {
    let table = ExportTable::from_columns(grid, columns)?;
    CsvExporter::default().render(&table)
}

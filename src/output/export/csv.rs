//! CSV export of concentration tables
//!
//! This module serializes an [`ExportTable`] to CSV (Comma-Separated Values),
//! readable by spreadsheets, pandas, R and MATLAB.
//!
//! # Features
//!
//! - **Header row first**: `Time (days)` then one label per depth
//! - **No index column**
//! - **Consistent notation**: every number uses the same notation and
//!   precision (scientific with 10 significant digits by default)
//! - **Optional metadata**: `#` comment lines with model parameters
//! - **Locale variants**: delimiter and decimal separator are configurable
//!
//! # Quick Example
//!
//! ```rust
//! use contam_rs::output::export::{CsvExporter, ExportTable, Exporter};
//! use contam_rs::physics::{ConcentrationSeries, TimeGrid};
//! use indexmap::IndexMap;
//!
//! let grid = TimeGrid::from_points(vec![1.0, 2.0]).unwrap();
//! let mut columns = IndexMap::new();
//! columns.insert("Depth 10 cm".to_string(), ConcentrationSeries::from_vec(vec![43.5, 0.0]));
//!
//! let table = ExportTable::from_columns(&grid, &columns).unwrap();
//! let csv = CsvExporter::default().render(&table).unwrap();
//!
//! assert_eq!(
//!     csv,
//!     "Time (days),Depth 10 cm\n\
//!      1.000000000e0,4.350000000e1\n\
//!      2.000000000e0,0.000000000e0\n"
//! );
//! ```
//!
//! **With metadata** (`CsvConfig::with_metadata`):
//! ```text
//! # Contaminant Transport Simulation Data
//! # Generated: 2026-10-19T15:30:00+00:00
//! # Model: Erfc Dispersion-Decay
//! # Source Concentration: 100 mg/L
//! # Dispersion Coefficient: 10 cm²/day
//! # Decay Coefficient: 0.01 1/day
//! # Time Range: 1 - 100 days (200 points)
//! #
//! Time (days),Depth 10 cm,Depth 50 cm,Depth 90 cm
//! ...
//! ```

use std::fmt::Write;

use log::info;

use super::{ExportError, ExportTable, Exporter, CSV_MIME_TYPE, EXPORT_FILE_NAME};
use crate::models::TransportParameters;
use crate::solver::SimulationResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Number notation used for every value of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `d.ddddde±x` with `precision` significant digits
    #[default]
    Scientific,

    /// `ddd.dddd` with `precision` decimal places
    ///
    /// Small concentrations lose significant digits in this notation.
    Fixed,
}

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use contam_rs::output::export::{CsvConfig, Notation};
///
/// let config = CsvConfig::default().precision(12);
/// assert_eq!(config.notation, Notation::Scientific);
/// assert!(config.validate().is_ok());
///
/// // Fewer than 6 significant digits would not round-trip
/// assert!(CsvConfig::default().precision(4).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Notation for every number (default: scientific)
    pub notation: Notation,

    /// Significant digits (scientific) or decimal places (fixed), default 10
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

/// Smallest scientific precision accepted by [`CsvConfig::validate`]
pub const MIN_SIGNIFICANT_DIGITS: usize = 6;

/// Largest useful scientific precision for `f64`
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            notation: Notation::Scientific,
            precision: 10,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon delimiter, comma decimal separator)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Full double precision (17 significant digits, exact round-trip)
    pub fn high_precision() -> Self {
        Self {
            precision: MAX_SIGNIFICANT_DIGITS,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: fixed notation with `decimals` decimal places
    ///
    /// Rendering fails if any non-zero value would keep fewer than
    /// [`MIN_SIGNIFICANT_DIGITS`] significant digits.
    pub fn fixed(mut self, decimals: usize) -> Self {
        self.notation = Notation::Fixed;
        self.precision = decimals;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Check that the configuration produces a parseable file
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.delimiter == self.decimal_separator {
            return Err(ExportError::InvalidConfig(format!(
                "delimiter and decimal separator are both '{}'",
                self.delimiter
            )));
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') || self.delimiter.is_ascii_digit() {
            return Err(ExportError::InvalidConfig(format!(
                "'{}' cannot be used as delimiter",
                self.delimiter.escape_default()
            )));
        }
        if self.notation == Notation::Scientific
            && !(MIN_SIGNIFICANT_DIGITS..=MAX_SIGNIFICANT_DIGITS).contains(&self.precision)
        {
            return Err(ExportError::InvalidConfig(format!(
                "scientific precision must be between {} and {} significant digits, got {}",
                MIN_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS, self.precision
            )));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvMetadata {
    /// Model name
    pub model_name: Option<String>,

    /// Source concentration C₀ (mg/L)
    pub source_concentration: Option<f64>,

    /// Dispersion coefficient D (cm²/day)
    pub dispersion: Option<f64>,

    /// Decay coefficient k (1/day)
    pub decay: Option<f64>,

    /// Time grid as (first, last, points)
    pub time_range: Option<(f64, f64, usize)>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing a simulation and the parameters that produced it
    pub fn from_simulation(result: &SimulationResult, parameters: &TransportParameters) -> Self {
        Self {
            model_name: Some(result.model_name.clone()),
            source_concentration: Some(parameters.source_concentration()),
            dispersion: Some(parameters.dispersion()),
            decay: Some(parameters.decay()),
            time_range: Some((result.time_grid.first(), result.time_grid.last(), result.time_grid.len())),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header(out: &mut String, metadata: &CsvMetadata) -> std::fmt::Result {
    writeln!(out, "# Contaminant Transport Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(c0) = metadata.source_concentration {
        writeln!(out, "# Source Concentration: {} mg/L", c0)?;
    }
    if let Some(d) = metadata.dispersion {
        writeln!(out, "# Dispersion Coefficient: {} cm²/day", d)?;
    }
    if let Some(k) = metadata.decay {
        writeln!(out, "# Decay Coefficient: {} 1/day", k)?;
    }
    if let Some((first, last, points)) = metadata.time_range {
        writeln!(out, "# Time Range: {} - {} days ({} points)", first, last, points)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")
}

/// Format number with configured notation, precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = match config.notation {
        Notation::Scientific => format!("{:.prec$e}", value, prec = config.precision.saturating_sub(1)),
        Notation::Fixed => format!("{:.prec$}", value, prec = config.precision),
    };

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Significant digits `value` keeps when printed with `decimals` decimal places
fn fixed_significant_digits(value: f64, decimals: usize) -> i64 {
    if value == 0.0 {
        return i64::MAX;
    }
    decimals as i64 + value.abs().log10().floor() as i64 + 1
}

/// Reject fixed notation that would print some value with too few significant digits
fn check_fixed_resolution(table: &ExportTable, decimals: usize) -> Result<(), ExportError> {
    let min = MIN_SIGNIFICANT_DIGITS as i64;
    for (row, values) in table.rows().enumerate() {
        if let Some(&value) = values.iter().find(|&&v| fixed_significant_digits(v, decimals) < min) {
            return Err(ExportError::InvalidConfig(format!(
                "{} decimal places keep fewer than {} significant digits of {:e} (row {})",
                decimals, MIN_SIGNIFICANT_DIGITS, value, row
            )));
        }
    }
    Ok(())
}

/// Quote a header field if it contains the delimiter, a quote or a line break
fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains(['"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with a custom configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }
}

impl Exporter for CsvExporter {
    type Error = ExportError;

    fn render(&self, table: &ExportTable) -> Result<String, ExportError> {
        self.config.validate()?;
        if self.config.notation == Notation::Fixed {
            check_fixed_resolution(table, self.config.precision)?;
        }

        let config = &self.config;
        let delimiter = config.delimiter.to_string();
        let mut out = String::with_capacity(table.n_rows() * table.n_columns() * 18);

        if config.include_metadata
            && let Some(metadata) = &config.metadata
        {
            write_metadata_header(&mut out, metadata)?;
        }

        let header: Vec<String> = table.headers().map(|h| escape_field(h, config.delimiter)).collect();
        writeln!(out, "{}", header.join(&delimiter))?;

        for row in table.rows() {
            let fields: Vec<String> = row.iter().map(|&v| format_number(v, config)).collect();
            writeln!(out, "{}", fields.join(&delimiter))?;
        }

        info!(
            "rendered CSV: {} rows x {} columns ({} bytes)",
            table.n_rows(),
            table.n_columns(),
            out.len()
        );
        Ok(out)
    }

    fn file_name(&self) -> &str {
        EXPORT_FILE_NAME
    }

    fn mime_type(&self) -> &str {
        CSV_MIME_TYPE
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Error types
//!
//! Input problems are caught where values enter the crate (parameter
//! construction, grid construction, the simulator input boundary) and are
//! reported as [`ParameterError`]. Nothing downstream of a successful
//! construction can fail numerically: erfc underflow is ordinary floating-point
//! behaviour and is never reported.

use thiserror::Error;

use crate::output::export::ExportError;

/// Crate-level result type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected model or grid input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("source concentration must be finite and non-negative, got {0}")]
    InvalidSourceConcentration(f64),

    #[error("dispersion coefficient must be finite and strictly positive, got {0}")]
    NonPositiveDispersion(f64),

    #[error("decay coefficient must be finite and non-negative, got {0}")]
    NegativeDecay(f64),

    #[error("depth must be finite and non-negative, got {0}")]
    InvalidDepth(f64),

    #[error("depth {0} cm is selected more than once")]
    DuplicateDepth(f64),

    #[error("depth {0} cm is not one of the selectable depths")]
    UnsupportedDepth(f64),

    #[error("time points must be finite and strictly positive, got {value} at index {index}")]
    NonPositiveTime { index: usize, value: f64 },

    #[error("time points must be strictly increasing, violated at index {index}")]
    UnorderedTime { index: usize },

    #[error("time grid needs at least 2 points, got {0}")]
    TooFewTimePoints(usize),

    #[error("time grid upper bound {t_max} must exceed lower bound {t_min}")]
    EmptyTimeRange { t_min: f64, t_max: f64 },

    #[error("{name} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Top-level error for the simulator and the command line
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("plot rendering failed: {0}")]
    Plot(String),

    #[error("invalid parameter file: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

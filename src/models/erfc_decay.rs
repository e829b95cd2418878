//! Erfc solution with first-order decay
//!
//! Closed-form concentration below a constant source in a semi-infinite
//! column, with dispersion and first-order decay (sorption + biodegradation):
//!
//! ```text
//! C(z, t) = C₀ · erfc( z / (2·√(D·t)) ) · exp(-k·t)
//! ```
//!
//! | Symbol | Meaning                          | Unit    |
//! |--------|----------------------------------|---------|
//! | C₀     | source concentration at z = 0    | mg/L    |
//! | D      | dispersion coefficient           | cm²/day |
//! | k      | decay / sorption rate            | 1/day   |
//! | z      | depth below the source           | cm      |
//! | t      | time since release               | days    |
//!
//! # Properties
//!
//! For `z ≥ 0`, `D > 0`, `t > 0`, `k ≥ 0`:
//!
//! - `0 ≤ C ≤ C₀`, because `erfc` of a non-negative argument lies in `[0, 1]`
//! - `C` is non-increasing in `z`
//! - `C(0, t) = C₀·exp(-k·t)` exactly, since `erfc(0) = 1`
//! - `t → ∞`: `C → 0` when `k > 0`, `C → C₀` when `k = 0`
//!
//! # Example
//!
//! ```rust
//! use contam_rs::models::{ErfcDecayModel, TransportParameters};
//! use contam_rs::physics::TransportModel;
//!
//! let params = TransportParameters::new(100.0, 10.0, 0.01).unwrap();
//! let model = ErfcDecayModel::new(params);
//!
//! // 100 · erfc(0.5) · exp(-0.1) ≈ 43.39 mg/L
//! let c = model.concentration(10.0, 10.0);
//! assert!((c - 43.39).abs() < 0.01);
//! ```

use crate::error::ParameterError;
use crate::models::parameters::TransportParameters;
use crate::physics::special::erfc;
use crate::physics::{ConcentrationSeries, TimeGrid, TransportModel};

/// Erfc transport model with exponential decay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErfcDecayModel {
    parameters: TransportParameters,
}

impl ErfcDecayModel {
    /// Create the model from validated parameters
    pub fn new(parameters: TransportParameters) -> Self {
        Self { parameters }
    }

    /// Model parameters
    pub fn parameters(&self) -> &TransportParameters {
        &self.parameters
    }

    /// Dimensionless erfc argument `z / (2·√(D·t))`
    pub fn similarity_variable(&self, depth: f64, time: f64) -> f64 {
        depth / (2.0 * (self.parameters.dispersion() * time).sqrt())
    }
}

impl TransportModel for ErfcDecayModel {
    fn concentration(&self, depth: f64, time: f64) -> f64 {
        let p = &self.parameters;
        p.source_concentration() * erfc(self.similarity_variable(depth, time)) * (-p.decay() * time).exp()
    }

    fn name(&self) -> &str {
        "Erfc Dispersion-Decay"
    }
}

/// Evaluate the erfc-decay solution for one depth over a time grid
///
/// The output has one value per grid point, in grid order.
///
/// # Errors
///
/// [`ParameterError::InvalidDepth`] when `depth` is negative or not finite.
/// Parameters and grid are valid by construction.
///
/// # Example
///
/// ```rust
/// use contam_rs::models::{evaluate, TransportParameters};
/// use contam_rs::physics::TimeGrid;
///
/// let params = TransportParameters::new(100.0, 10.0, 0.0).unwrap();
/// let grid = TimeGrid::from_points(vec![1.0, 50.0, 100.0]).unwrap();
///
/// let series = evaluate(&params, 0.0, &grid).unwrap();
/// assert_eq!(series.as_slice(), &[100.0, 100.0, 100.0]);
/// ```
pub fn evaluate(
    parameters: &TransportParameters,
    depth: f64,
    grid: &TimeGrid,
) -> Result<ConcentrationSeries, ParameterError> {
    if !depth.is_finite() || depth < 0.0 {
        return Err(ParameterError::InvalidDepth(depth));
    }
    Ok(ErfcDecayModel::new(*parameters).series(depth, grid))
}

// =================================================================================================
// Tests
// =================================================================================================

//! Transport parameters
//!
//! | Symbol | Field                  | Unit    | Accepted          |
//! |--------|------------------------|---------|-------------------|
//! | C₀     | `source_concentration` | mg/L    | finite, ≥ 0       |
//! | D      | `dispersion`           | cm²/day | finite, > 0       |
//! | k      | `decay`                | 1/day   | finite, ≥ 0       |
//!
//! D = 0 would put a zero under the square root of the erfc argument; it is
//! rejected here instead of being evaluated. Narrower interactive ranges are
//! enforced by [`ParameterSnapshot`](crate::simulator::ParameterSnapshot).

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Validated, immutable parameters of the erfc-decay solution
///
/// # Example
///
/// ```rust
/// use contam_rs::models::TransportParameters;
///
/// let params = TransportParameters::new(100.0, 10.0, 0.01).unwrap();
/// assert_eq!(params.dispersion(), 10.0);
///
/// assert!(TransportParameters::new(100.0, 0.0, 0.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransportParameters")]
pub struct TransportParameters {
    source_concentration: f64,
    dispersion: f64,
    decay: f64,
}

impl TransportParameters {
    /// Validate and build
    ///
    /// # Errors
    ///
    /// - [`ParameterError::InvalidSourceConcentration`]: C₀ negative or not finite
    /// - [`ParameterError::NonPositiveDispersion`]: D ≤ 0 or not finite
    /// - [`ParameterError::NegativeDecay`]: k negative or not finite
    pub fn new(source_concentration: f64, dispersion: f64, decay: f64) -> Result<Self, ParameterError> {
        if !source_concentration.is_finite() || source_concentration < 0.0 {
            return Err(ParameterError::InvalidSourceConcentration(source_concentration));
        }
        if !dispersion.is_finite() || dispersion <= 0.0 {
            return Err(ParameterError::NonPositiveDispersion(dispersion));
        }
        if !decay.is_finite() || decay < 0.0 {
            return Err(ParameterError::NegativeDecay(decay));
        }

        Ok(Self {
            source_concentration,
            dispersion,
            decay,
        })
    }

    /// Source concentration C₀ (mg/L)
    pub fn source_concentration(&self) -> f64 {
        self.source_concentration
    }

    /// Dispersion coefficient D (cm²/day)
    pub fn dispersion(&self) -> f64 {
        self.dispersion
    }

    /// Decay / sorption rate k (1/day)
    pub fn decay(&self) -> f64 {
        self.decay
    }
}

/// Unvalidated wire form, checked through `TryFrom` on deserialization
#[derive(Deserialize)]
struct RawTransportParameters {
    source_concentration: f64,
    dispersion: f64,
    decay: f64,
}

impl TryFrom<RawTransportParameters> for TransportParameters {
    type Error = ParameterError;

    fn try_from(raw: RawTransportParameters) -> Result<Self, Self::Error> {
        Self::new(raw.source_concentration, raw.dispersion, raw.decay)
    }
}

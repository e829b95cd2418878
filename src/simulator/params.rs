//! Parameter snapshot: the input boundary of a refresh cycle
//!
//! A [`ParameterSnapshot`] carries the raw user choices. Ranges are checked
//! here, before any model is built, so an out-of-range slider value is
//! reported as [`ParameterError::OutOfRange`] rather than surfacing later as a
//! model construction error.
//!
//! | Parameter            | Range          | Default        |
//! |----------------------|----------------|----------------|
//! | C₀ (mg/L)            | [10, 500]      | 100            |
//! | D (cm²/day)          | [1, 100]       | 10             |
//! | depths (cm)          | ⊆ {10,30,50,70,90} | {10, 50, 90} |
//! | t_max (days)         | [10, 300]      | 100            |
//! | k (1/day)            | [0, 0.2]       | 0.01           |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::models::TransportParameters;
use crate::physics::DepthSet;
use crate::solver::{SolverConfiguration, DEFAULT_TIME_POINTS, DEFAULT_T_MIN};

/// Closed interval accepted for one scalar input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParameterRange {
    /// Accept `value` if it lies in `[min, max]` (NaN never does)
    pub fn check(&self, value: f64) -> Result<f64, ParameterError> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(ParameterError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const SOURCE_CONCENTRATION_RANGE: ParameterRange = ParameterRange {
    name: "source concentration",
    min: 10.0,
    max: 500.0,
    default: 100.0,
};

pub const DISPERSION_RANGE: ParameterRange = ParameterRange {
    name: "dispersion coefficient",
    min: 1.0,
    max: 100.0,
    default: 10.0,
};

pub const T_MAX_RANGE: ParameterRange = ParameterRange {
    name: "maximum time",
    min: 10.0,
    max: 300.0,
    default: 100.0,
};

pub const DECAY_RANGE: ParameterRange = ParameterRange {
    name: "decay coefficient",
    min: 0.0,
    max: 0.2,
    default: 0.01,
};

/// Depths (cm) a user may select
pub const DEPTH_CHOICES: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];

/// Depths selected when nothing else is given
pub const DEFAULT_DEPTHS: [f64; 3] = [10.0, 50.0, 90.0];

/// Full set of user inputs for one refresh cycle
///
/// Missing fields fall back to the defaults when deserialized, so a parameter
/// file only needs to list what it changes:
///
/// ```rust
/// use contam_rs::simulator::ParameterSnapshot;
///
/// let snapshot = ParameterSnapshot::from_json_str(r#"{ "decay": 0.0 }"#).unwrap();
/// assert_eq!(snapshot.decay, 0.0);
/// assert_eq!(snapshot.dispersion, 10.0);
/// assert_eq!(snapshot.depths, vec![10.0, 50.0, 90.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSnapshot {
    /// C₀ (mg/L)
    pub source_concentration: f64,

    /// D (cm²/day)
    pub dispersion: f64,

    /// Selected depths (cm), in legend/column order
    pub depths: Vec<f64>,

    /// Upper bound of the time grid (days)
    pub t_max: f64,

    /// k (1/day)
    pub decay: f64,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            source_concentration: SOURCE_CONCENTRATION_RANGE.default,
            dispersion: DISPERSION_RANGE.default,
            depths: DEFAULT_DEPTHS.to_vec(),
            t_max: T_MAX_RANGE.default,
            decay: DECAY_RANGE.default,
        }
    }
}

impl ParameterSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check every input against its accepted range
    pub fn validate(&self) -> Result<(), ParameterError> {
        SOURCE_CONCENTRATION_RANGE.check(self.source_concentration)?;
        DISPERSION_RANGE.check(self.dispersion)?;
        T_MAX_RANGE.check(self.t_max)?;
        DECAY_RANGE.check(self.decay)?;

        if let Some(&depth) = self.depths.iter().find(|d| !DEPTH_CHOICES.contains(d)) {
            return Err(ParameterError::UnsupportedDepth(depth));
        }
        Ok(())
    }

    /// Model parameters (C₀, D, k)
    pub fn transport_parameters(&self) -> Result<TransportParameters, ParameterError> {
        TransportParameters::new(self.source_concentration, self.dispersion, self.decay)
    }

    /// Selected depths; rejects a depth chosen twice
    pub fn depth_set(&self) -> Result<DepthSet, ParameterError> {
        DepthSet::new(self.depths.iter().copied())
    }

    /// Grid `linspace(1, t_max, 200)`
    pub fn solver_configuration(&self) -> SolverConfiguration {
        SolverConfiguration::new(DEFAULT_T_MIN, self.t_max, DEFAULT_TIME_POINTS)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults_are_valid() {
        let snapshot = ParameterSnapshot::default();
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.source_concentration, 100.0);
        assert_eq!(snapshot.t_max, 100.0);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let snapshot = ParameterSnapshot {
            source_concentration: 500.0,
            dispersion: 1.0,
            t_max: 10.0,
            decay: 0.0,
            ..Default::default()
        };
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_dispersion_below_range() {
        let snapshot = ParameterSnapshot {
            dispersion: 0.0,
            ..Default::default()
        };
        assert_eq!(
            snapshot.validate(),
            Err(ParameterError::OutOfRange {
                name: "dispersion coefficient",
                value: 0.0,
                min: 1.0,
                max: 100.0,
            })
        );
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let snapshot = ParameterSnapshot {
            decay: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            snapshot.validate(),
            Err(ParameterError::OutOfRange { name: "decay coefficient", .. })
        ));
    }

    #[test]
    fn test_unsupported_depth() {
        let snapshot = ParameterSnapshot {
            depths: vec![10.0, 20.0],
            ..Default::default()
        };
        assert_eq!(snapshot.validate(), Err(ParameterError::UnsupportedDepth(20.0)));
    }

    #[test]
    fn test_duplicate_depth_rejected_by_depth_set() {
        let snapshot = ParameterSnapshot {
            depths: vec![30.0, 30.0],
            ..Default::default()
        };
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.depth_set().unwrap_err(), ParameterError::DuplicateDepth(30.0));
    }

    #[test]
    fn test_solver_configuration_grid() {
        let snapshot = ParameterSnapshot {
            t_max: 250.0,
            ..Default::default()
        };
        let grid = snapshot.solver_configuration().time_grid().unwrap();
        assert_eq!(grid.len(), 200);
        assert_eq!(grid.first(), 1.0);
        assert_eq!(grid.last(), 250.0);
    }

    #[test]
    fn test_json_unknown_field_rejected() {
        let err = ParameterSnapshot::from_json_str(r#"{ "velocity": 1.0 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{ "source_concentration": 250, "depths": [70] }"#).unwrap();

        let snapshot = ParameterSnapshot::from_json_file(&path).unwrap();
        assert_eq!(snapshot.source_concentration, 250.0);
        assert_eq!(snapshot.depths, vec![70.0]);
        assert_eq!(snapshot.decay, 0.01);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParameterSnapshot::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

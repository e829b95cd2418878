//! Simulation scenario definition
//!
//! A scenario combines a transport model with the depths to evaluate.
use crate::physics::{DepthSet, TransportModel};

/// Simulation scenario
///
/// Defines a specific case to evaluate:
/// - Transport model (formula + parameters)
/// - Depth set (where below the source)
///
/// The same scenario can be evaluated on different time grids or with
/// different solvers. This is the "WHAT to solve" (not "HOW to solve").
///
/// # Example
///
/// ```rust
/// use contam_rs::models::{ErfcDecayModel, TransportParameters};
/// use contam_rs::physics::DepthSet;
/// use contam_rs::solver::Scenario;
///
/// let params = TransportParameters::new(100.0, 10.0, 0.01).unwrap();
/// let depths = DepthSet::new([10.0, 50.0, 90.0]).unwrap();
/// let scenario = Scenario::new(Box::new(ErfcDecayModel::new(params)), depths);
///
/// assert_eq!(scenario.depths.len(), 3);
/// ```
pub struct Scenario {
    /// Transport model
    pub model: Box<dyn TransportModel>,

    /// Depths to evaluate, in selection order
    pub depths: DepthSet,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn TransportModel>, depths: DepthSet) -> Self {
        Self { model, depths }
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.get_model_name())
            .field("depths", &self.depths.as_slice())
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

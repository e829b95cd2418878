//! Closed-form evaluation
//!
//! The analytical solver evaluates a closed-form model at every
//! (depth, time) pair of the scenario. There is no time stepping: each value
//! is independent of every other, so depths can be evaluated in any order.
//!
//! # Parallel evaluation
//!
//! With the `parallel` cargo feature, depths are evaluated on the rayon pool
//! once `depths × time_points` reaches the solver's parallel threshold. Below
//! it, thread dispatch costs more than the arithmetic. Output order and
//! values are the same in both modes.
//!
//! # Example
//!
//! ```rust
//! use contam_rs::models::{ErfcDecayModel, TransportParameters};
//! use contam_rs::physics::DepthSet;
//! use contam_rs::solver::{AnalyticalSolver, Scenario, Solver, SolverConfiguration};
//!
//! let params = TransportParameters::new(100.0, 10.0, 0.01).unwrap();
//! let scenario = Scenario::new(
//!     Box::new(ErfcDecayModel::new(params)),
//!     DepthSet::new([10.0, 50.0, 90.0]).unwrap(),
//! );
//!
//! let result = AnalyticalSolver::new()
//!     .solve(&scenario, &SolverConfiguration::default())
//!     .unwrap();
//!
//! assert_eq!(result.len(), 3);
//! assert_eq!(result.series[0].values.len(), 200);
//! ```

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::ParameterError;
use crate::physics::{DepthSeries, TimeGrid, TransportModel};
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

/// Number of evaluations from which depths go to the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Solver for closed-form transport models
#[derive(Debug, Clone, Copy)]
pub struct AnalyticalSolver {
    parallel_threshold: usize,
}

impl Default for AnalyticalSolver {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl AnalyticalSolver {
    /// Create a solver with the default parallel threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the parallel threshold (evaluations)
    ///
    /// Only has an effect when built with the `parallel` feature.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Current parallel threshold
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Whether a workload of `depths × points` evaluations runs in parallel
    pub fn runs_parallel(&self, depths: usize, points: usize) -> bool {
        cfg!(feature = "parallel") && depths > 1 && depths * points >= self.parallel_threshold
    }
}

fn evaluate_depth(model: &dyn TransportModel, depth: f64, grid: &TimeGrid) -> DepthSeries {
    let series = DepthSeries::new(depth, model.series(depth, grid));
    debug!("evaluated {}", series);
    series
}

impl Solver for AnalyticalSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, ParameterError> {
        let grid = config.time_grid()?;
        let model = scenario.model.as_ref();
        let depths = scenario.depths.as_slice();

        let series: Vec<DepthSeries> = if self.runs_parallel(depths.len(), grid.len()) {
            #[cfg(feature = "parallel")]
            {
                depths.par_iter().map(|&z| evaluate_depth(model, z, &grid)).collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                unreachable!("parallel evaluation requires the `parallel` feature")
            }
        } else {
            depths.iter().map(|&z| evaluate_depth(model, z, &grid)).collect()
        };

        Ok(SimulationResult::new(grid, series, scenario.get_model_name()))
    }

    fn name(&self) -> &str {
        "Analytical"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ErfcDecayModel, TransportParameters};
    use crate::physics::DepthSet;

    fn scenario(depths: &[f64]) -> Scenario {
        let params = TransportParameters::new(100.0, 10.0, 0.01).unwrap();
        Scenario::new(
            Box::new(ErfcDecayModel::new(params)),
            DepthSet::new(depths.iter().copied()).unwrap(),
        )
    }

    #[test]
    fn test_one_series_per_depth_in_order() {
        let result = AnalyticalSolver::new()
            .solve(&scenario(&[90.0, 10.0, 50.0]), &SolverConfiguration::default())
            .unwrap();

        let labels: Vec<&str> = result.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Depth 90 cm", "Depth 10 cm", "Depth 50 cm"]);
        assert!(result.series.iter().all(|s| s.values.len() == 200));
        assert_eq!(result.model_name, "Erfc Dispersion-Decay");
    }

    #[test]
    fn test_empty_depth_set_gives_empty_result() {
        let result = AnalyticalSolver::new()
            .solve(&scenario(&[]), &SolverConfiguration::default())
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.time_grid.len(), 200);
    }

    #[test]
    fn test_invalid_grid_is_rejected() {
        let err = AnalyticalSolver::new()
            .solve(&scenario(&[10.0]), &SolverConfiguration::new(0.0, 10.0, 10))
            .unwrap_err();
        assert!(matches!(err, ParameterError::NonPositiveTime { .. }));
    }

    #[test]
    fn test_parallel_decision() {
        let solver = AnalyticalSolver::new().with_parallel_threshold(100);
        assert_eq!(solver.parallel_threshold(), 100);
        assert!(!solver.runs_parallel(1, 1000));
        assert!(!solver.runs_parallel(3, 10));
        assert_eq!(solver.runs_parallel(3, 200), cfg!(feature = "parallel"));
    }

    #[test]
    fn test_threshold_never_zero() {
        assert_eq!(AnalyticalSolver::new().with_parallel_threshold(0).parallel_threshold(), 1);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let sc = scenario(&[10.0, 30.0, 50.0, 70.0, 90.0]);
        let config = SolverConfiguration::default();
        let sequential = AnalyticalSolver::new()
            .with_parallel_threshold(usize::MAX)
            .solve(&sc, &config)
            .unwrap();
        let eager = AnalyticalSolver::new()
            .with_parallel_threshold(1)
            .solve(&sc, &config)
            .unwrap();
        assert_eq!(sequential, eager);
    }
}

//! Solver traits and types
//!
//! # Design
//!
//! - [`SolverConfiguration`] says WHERE in time to evaluate (the grid)
//! - [`Scenario`](crate::solver::Scenario) says WHAT to evaluate (model + depths)
//! - [`Solver`] says HOW (sequential, parallel, ...)
//! - [`SimulationResult`] holds the outcome for the output layer
//!
//! # Stability
//!
//! - `Solver` trait: stable, one required method
//! - `SimulationResult`: fields are public and will not be removed

use indexmap::IndexMap;

use crate::error::ParameterError;
use crate::physics::{ConcentrationSeries, DepthSeries, TimeGrid};
use crate::solver::Scenario;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// First time point of the interactive grid (days)
///
/// The erfc solution is singular at `t = 0`, so the grid starts one day in.
pub const DEFAULT_T_MIN: f64 = 1.0;

/// Number of points of the interactive grid
pub const DEFAULT_TIME_POINTS: usize = 200;

/// Default simulated period (days)
pub const DEFAULT_T_MAX: f64 = 100.0;

/// Time grid configuration
///
/// # Example
///
/// ```rust
/// use contam_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::up_to(250.0);
/// let grid = config.time_grid().unwrap();
///
/// assert_eq!(grid.len(), 200);
/// assert_eq!(grid.first(), 1.0);
/// assert_eq!(grid.last(), 250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfiguration {
    /// First time point (days, > 0)
    pub t_min: f64,

    /// Last time point (days)
    pub t_max: f64,

    /// Number of linearly spaced points
    pub time_points: usize,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            t_min: DEFAULT_T_MIN,
            t_max: DEFAULT_T_MAX,
            time_points: DEFAULT_TIME_POINTS,
        }
    }
}

impl SolverConfiguration {
    /// Create a configuration with explicit bounds and resolution
    pub fn new(t_min: f64, t_max: f64, time_points: usize) -> Self {
        Self { t_min, t_max, time_points }
    }

    /// Default grid (from 1 day, 200 points) ending at `t_max`
    pub fn up_to(t_max: f64) -> Self {
        Self { t_max, ..Default::default() }
    }

    /// Builder pattern: set the number of time points
    pub fn time_points(mut self, time_points: usize) -> Self {
        self.time_points = time_points;
        self
    }

    /// Build the linearly spaced grid
    pub fn time_grid(&self) -> Result<TimeGrid, ParameterError> {
        TimeGrid::linspace(self.t_min, self.t_max, self.time_points)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.time_grid().map(|_| ())
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Outcome of one evaluation: the shared time grid and one series per depth
///
/// Series appear in the order the depths were selected. Every series has
/// exactly `time_grid.len()` values.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Time points shared by every series
    pub time_grid: TimeGrid,

    /// One series per depth, in selection order
    pub series: Vec<DepthSeries>,

    /// Name of the model that produced the series
    pub model_name: String,
}

impl SimulationResult {
    /// Assemble a result
    pub fn new(time_grid: TimeGrid, series: Vec<DepthSeries>, model_name: impl Into<String>) -> Self {
        Self {
            time_grid,
            series,
            model_name: model_name.into(),
        }
    }

    /// Number of depth series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when no depth was evaluated
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Look up a series by its label (e.g. `"Depth 50 cm"`)
    pub fn get(&self, label: &str) -> Option<&DepthSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Look up a series by depth (cm)
    pub fn get_depth(&self, depth: f64) -> Option<&DepthSeries> {
        self.series.iter().find(|s| s.depth == depth)
    }

    /// Label → series map in selection order
    ///
    /// This is the form consumed by
    /// [`ExportTable::from_columns`](crate::output::export::ExportTable::from_columns).
    pub fn series_map(&self) -> IndexMap<String, ConcentrationSeries> {
        self.series
            .iter()
            .map(|s| (s.label.clone(), s.values.clone()))
            .collect()
    }

    /// Largest concentration over all depths, `None` when there is no series
    pub fn max_concentration(&self) -> Option<f64> {
        self.series.iter().filter_map(|s| s.values.max()).reduce(f64::max)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for evaluation strategies
///
/// A solver takes a scenario and a grid configuration and returns every
/// requested series. Implementations must return series in depth-selection
/// order and must not drop or reorder time points.
pub trait Solver {
    /// Evaluate the scenario on the configured grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not describe a valid grid.
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, ParameterError>;

    /// Solver name
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

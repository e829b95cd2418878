//! Transport model trait
//!
//! A transport model gives the concentration at a depth and a time. It does
//! not decide which depths or times are evaluated; that is the solver's job.

use crate::physics::data::{ConcentrationSeries, TimeGrid};

/// Trait for closed-form transport models
///
/// # Responsibility
///
/// Computes `C(z, t)` for a single depth `z` (cm) and time `t` (days).
/// Implementations are pure: the same inputs always give the same output and
/// evaluations may run in any order or in parallel.
///
/// # Preconditions
///
/// Callers pass `z ≥ 0` and `t > 0`. The data types in
/// [`physics::data`](crate::physics::data) enforce both, so code going through
/// [`TimeGrid`] and [`DepthSet`](crate::physics::DepthSet) never violates them.
pub trait TransportModel: Send + Sync {
    /// Concentration at depth `depth` (cm) and time `time` (days), in mg/L
    fn concentration(&self, depth: f64, time: f64) -> f64;

    /// Model name (used in logs and export metadata)
    fn name(&self) -> &str;

    /// Evaluate one depth over every point of a time grid
    ///
    /// The output has exactly `grid.len()` values, in grid order.
    fn series(&self, depth: f64, grid: &TimeGrid) -> ConcentrationSeries {
        ConcentrationSeries::new(grid.as_vector().map(|t| self.concentration(depth, t)))
    }
}

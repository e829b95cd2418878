//! Physical data types
//!
//! This module holds the value types that flow between the evaluator, the
//! solver and the output layer:
//!
//! - [`TimeGrid`]: strictly positive, strictly increasing time points (days)
//! - [`DepthSet`]: insertion-ordered, duplicate-free depths (cm)
//! - [`ConcentrationSeries`]: one concentration per time point (mg/L)
//! - [`DepthSeries`]: a series paired with its depth and display label
//!
//! # Invariants
//!
//! The constructors are the only way to build a `TimeGrid` or a `DepthSet`,
//! and they reject anything that would make the closed-form solution
//! undefined (`t ≤ 0`, negative depth, NaN). Code that receives these types
//! can evaluate without further checks.

use nalgebra::DVector;
use std::fmt;

use crate::error::ParameterError;

// =================================================================================================
// Time Grid
// =================================================================================================

/// Ordered sequence of strictly positive time points (days)
///
/// # Example
///
/// ```rust
/// use contam_rs::physics::TimeGrid;
///
/// let grid = TimeGrid::linspace(1.0, 100.0, 200).unwrap();
/// assert_eq!(grid.len(), 200);
/// assert_eq!(grid.first(), 1.0);
/// assert_eq!(grid.last(), 100.0);
///
/// // t = 0 is singular for the erfc solution and is rejected
/// assert!(TimeGrid::from_points(vec![0.0, 1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    points: DVector<f64>,
}

impl TimeGrid {
    /// Linearly spaced grid from `t_min` to `t_max` (both included)
    ///
    /// # Errors
    ///
    /// - `t_min` not finite or `≤ 0`
    /// - `t_max ≤ t_min` or not finite
    /// - fewer than 2 points
    pub fn linspace(t_min: f64, t_max: f64, points: usize) -> Result<Self, ParameterError> {
        if points < 2 {
            return Err(ParameterError::TooFewTimePoints(points));
        }
        if !t_min.is_finite() || t_min <= 0.0 {
            return Err(ParameterError::NonPositiveTime { index: 0, value: t_min });
        }
        if !t_max.is_finite() || t_max <= t_min {
            return Err(ParameterError::EmptyTimeRange { t_min, t_max });
        }

        let step = (t_max - t_min) / (points - 1) as f64;
        let mut values = DVector::from_fn(points, |i, _| t_min + step * i as f64);

        // Pin the upper bound so it is not perturbed by accumulated rounding
        values[points - 1] = t_max;

        Ok(Self { points: values })
    }

    /// Grid from explicit time points
    ///
    /// # Errors
    ///
    /// - empty input
    /// - any value not finite or `≤ 0`
    /// - values not strictly increasing
    pub fn from_points(points: Vec<f64>) -> Result<Self, ParameterError> {
        if points.is_empty() {
            return Err(ParameterError::TooFewTimePoints(0));
        }

        for (index, &value) in points.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::NonPositiveTime { index, value });
            }
            if index > 0 && value <= points[index - 1] {
                return Err(ParameterError::UnorderedTime { index });
            }
        }

        Ok(Self { points: DVector::from_vec(points) })
    }

    /// Number of time points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid has no points (construction requires at least one)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest time point
    pub fn first(&self) -> f64 {
        self.points[0]
    }

    /// Largest time point
    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Time points as a slice
    pub fn as_slice(&self) -> &[f64] {
        self.points.as_slice()
    }

    /// Iterate over the time points
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }

    /// Underlying vector
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.points
    }
}

// =================================================================================================
// Depth Set
// =================================================================================================

/// Display label used for a depth in plot legends and export headers
///
/// ```rust
/// use contam_rs::physics::depth_label;
///
/// assert_eq!(depth_label(10.0), "Depth 10 cm");
/// assert_eq!(depth_label(12.5), "Depth 12.5 cm");
/// ```
pub fn depth_label(depth: f64) -> String {
    format!("Depth {} cm", depth)
}

/// Insertion-ordered set of depths (cm)
///
/// Each depth is evaluated independently. Order is preserved so that plot
/// legends and export columns appear in the order the depths were selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepthSet {
    depths: Vec<f64>,
}

impl DepthSet {
    /// Build a depth set, rejecting negative, non-finite and repeated depths
    ///
    /// An empty set is allowed: it evaluates to no series.
    pub fn new(depths: impl IntoIterator<Item = f64>) -> Result<Self, ParameterError> {
        let mut set = Self::default();
        for depth in depths {
            set.insert(depth)?;
        }
        Ok(set)
    }

    /// Append a depth (`-0.0` is stored as `0.0`)
    pub fn insert(&mut self, depth: f64) -> Result<(), ParameterError> {
        if !depth.is_finite() || depth < 0.0 {
            return Err(ParameterError::InvalidDepth(depth));
        }
        let depth = depth + 0.0;
        if self.depths.contains(&depth) {
            return Err(ParameterError::DuplicateDepth(depth));
        }
        self.depths.push(depth);
        Ok(())
    }

    /// Number of depths
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// True when no depth is selected
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Depths in insertion order
    pub fn as_slice(&self) -> &[f64] {
        &self.depths
    }

    /// Iterate over the depths in insertion order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.depths.iter().copied()
    }
}

// =================================================================================================
// Concentration Series
// =================================================================================================

/// Concentration values (mg/L), one per time point of the grid they were evaluated on
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationSeries {
    values: DVector<f64>,
}

impl ConcentrationSeries {
    /// Wrap a vector of concentrations
    pub fn new(values: DVector<f64>) -> Self {
        Self { values }
    }

    /// Build from a plain `Vec`
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self { values: DVector::from_vec(values) }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for a series with no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as a slice
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Iterate over the values
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Largest value, or `None` for an empty series
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Underlying vector
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.values
    }
}

impl std::ops::Index<usize> for ConcentrationSeries {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Concentration series for one depth
#[derive(Debug, Clone, PartialEq)]
pub struct DepthSeries {
    /// Depth below the source (cm)
    pub depth: f64,

    /// Label shown in legends and used as export column header
    pub label: String,

    /// Concentration at each time point
    pub values: ConcentrationSeries,
}

impl DepthSeries {
    /// Pair a series with its depth; the label is derived with [`depth_label`]
    pub fn new(depth: f64, values: ConcentrationSeries) -> Self {
        Self {
            depth,
            label: depth_label(depth),
            values,
        }
    }
}

impl fmt::Display for DepthSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} points)", self.label, self.values.len())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

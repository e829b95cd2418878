//! Physical models
//!
//! This module provides the trait and value types shared by every transport
//! model, plus the special functions the closed-form solutions need.
//!
//! # Core Concepts
//!
//! - **Transport Model**: gives `C(z, t)` for one depth and one time
//! - **Time Grid**: where in time a model is evaluated (always `t > 0`)
//! - **Depth Set**: which depths are evaluated, in selection order
//! - **Concentration Series**: the result for one depth over the grid
//!
//! # Architecture
//!
//! Models are **separate from the solver**:
//! - The model provides the **formula** (physics)
//! - The solver decides **where** it is evaluated (grid, depths, parallelism)
//!
//! # Example
//!
//! ```rust
//! use contam_rs::physics::{TimeGrid, TransportModel};
//!
//! struct Constant;
//!
//! impl TransportModel for Constant {
//!     fn concentration(&self, _depth: f64, _time: f64) -> f64 { 1.0 }
//!     fn name(&self) -> &str { "Constant" }
//! }
//!
//! let grid = TimeGrid::linspace(1.0, 10.0, 10).unwrap();
//! let series = Constant.series(5.0, &grid);
//! assert_eq!(series.len(), 10);
//! ```
//!
//! # Available Models
//!
//! - **Erfc decay** ([`ErfcDecayModel`](crate::models::ErfcDecayModel)): constant
//!   source at `z = 0`, semi-infinite column, first-order decay

pub mod data;
pub mod special;
pub mod traits;

pub use data::{depth_label, ConcentrationSeries, DepthSeries, DepthSet, TimeGrid};
pub use traits::TransportModel;

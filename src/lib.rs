//! contam-rs: 1D Contaminant Transport Evaluator
//!
//! Closed-form concentration of a contaminant moving through a 1D soil
//! column under dispersion and first-order decay:
//!
//! ```text
//! C(z, t) = C₀ · erfc( z / (2·√(D·t)) ) · exp(−k·t)
//! ```
//!
//! evaluated on a time grid for a handful of depths, then exported as CSV and
//! plotted.
//!
//! # Architecture
//!
//! contam-rs keeps the layering of a simulation framework even though the
//! solution is analytic:
//!
//! 1. **Separation of Physics and Evaluation**
//!    - Models define the closed-form expression (what to compute)
//!    - The solver maps it over depths and the time grid (how to compute)
//!
//! 2. **Validation at construction**
//!    - `TransportParameters`, `TimeGrid` and `DepthSet` cannot hold invalid values
//!    - Evaluation itself never fails; erfc underflow yields 0.0
//!
//! # Quick Start
//!
//! ```rust
//! use contam_rs::models::{ErfcDecayModel, TransportParameters};
//! use contam_rs::physics::DepthSet;
//! use contam_rs::solver::{AnalyticalSolver, Scenario, Solver, SolverConfiguration};
//! use contam_rs::output::export::{CsvExporter, ExportTable, Exporter};
//!
//! # fn main() -> contam_rs::Result<()> {
//! // 1. Model and depths
//! let params = TransportParameters::new(100.0, 10.0, 0.01)?;
//! let scenario = Scenario::new(
//!     Box::new(ErfcDecayModel::new(params)),
//!     DepthSet::new([10.0, 50.0, 90.0])?,
//! );
//!
//! // 2. Time grid: 200 points from 1 to 100 days
//! let config = SolverConfiguration::up_to(100.0);
//!
//! // 3. Evaluate
//! let result = AnalyticalSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Export
//! let csv = CsvExporter::default().render(&ExportTable::from_result(&result)?)?;
//! assert!(csv.starts_with("Time (days),Depth 10 cm,Depth 50 cm,Depth 90 cm"));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Data model, `TransportModel` trait, erfc
//! - [`models`]: Transport parameters and the erfc dispersion-decay model
//! - [`solver`]: Evaluation over depths and time
//! - [`output`]: CSV export and plotting
//! - [`simulator`]: Parameter snapshot and refresh cycle
//! - [`cli`]: Command-line interface

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;
pub mod simulator;

pub mod cli;

pub use error::{Error, ParameterError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use contam_rs::prelude::*;
    //! ```
    pub use crate::physics::{ConcentrationSeries,
                             DepthSet,
                             TimeGrid,
                             TransportModel};
    pub use crate::models::{evaluate,
                            ErfcDecayModel,
                            TransportParameters};
    pub use crate::solver::{Solver,
                            SolverConfiguration,
                            Scenario,
                            SimulationResult,
                            AnalyticalSolver};
    pub use crate::simulator::{ParameterSnapshot,
                               Simulator};
}

//! Evaluation of transport scenarios
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to evaluate
//!    - Transport model (formula + parameters)
//!    - Depth set
//!
//! 2. **Configuration** (`SolverConfiguration`) - WHERE in time
//!    - Grid bounds and resolution (strictly positive times)
//!
//! 3. **Solver** (`Solver` trait) - HOW
//!    - `AnalyticalSolver`: direct evaluation, optionally parallel over depths
//!
//! ```text
//! ┌─────────────────┐   ┌──────────────┐
//! │ Transport Model │ + │  Depth Set   │ → Scenario
//! └─────────────────┘   └──────────────┘
//!                                 │
//!            SolverConfiguration ─┤
//!                                 ▼
//!                       ┌──────────────────┐
//!                       │ AnalyticalSolver │
//!                       └────────┬─────────┘
//!                                ▼
//!                      SimulationResult (grid + one series per depth)
//! ```
//!
//! # Error Handling
//!
//! The only failure is an invalid grid configuration, reported as
//! [`ParameterError`](crate::error::ParameterError). Model parameters and
//! depths were already validated when the scenario was built.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod analytical;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use analytical::{AnalyticalSolver, DEFAULT_PARALLEL_THRESHOLD};
pub use scenario::Scenario;
pub use traits::{
    SimulationResult,
    Solver,
    SolverConfiguration,
    DEFAULT_TIME_POINTS,
    DEFAULT_T_MAX,
    DEFAULT_T_MIN,
};

//! Transport models
//!
//! All models implement the [`TransportModel`](crate::physics::TransportModel)
//! trait. The solver calls `concentration` for every (depth, time) pair it
//! needs; models only carry the formula and its parameters.
//!
//! # Available Models
//!
//! ## [`ErfcDecayModel`]
//!
//! Constant source at the surface of a semi-infinite column, dispersion
//! through the porous medium and first-order loss (sorption, biodegradation).
//! Parameters are held in a validated [`TransportParameters`].
//!
//! The free function [`evaluate`] is the one-call form: parameters, one depth
//! and a time grid in, one concentration series out.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod erfc_decay;
pub mod parameters;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use erfc_decay::{evaluate, ErfcDecayModel};
pub use parameters::TransportParameters;

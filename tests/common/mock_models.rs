//! Mock transport models for testing
//!
//! Simple closed forms that make the solver's bookkeeping easy to check:
//! which depth went where, and which time each value belongs to.

use contam_rs::physics::TransportModel;

// =================================================================================================
// Pure Decay: C = C₀·exp(−k·t), independent of depth
// =================================================================================================

/// Depth-independent first-order decay
pub struct PureDecay {
    pub source: f64,
    pub decay_rate: f64,
}

impl PureDecay {
    pub fn new(source: f64, decay_rate: f64) -> Self {
        Self { source, decay_rate }
    }
}

impl TransportModel for PureDecay {
    fn concentration(&self, _depth: f64, time: f64) -> f64 {
        self.source * (-self.decay_rate * time).exp()
    }

    fn name(&self) -> &str {
        "Pure Decay"
    }
}

// =================================================================================================
// Depth Proportional: C = z + t / 1000
// =================================================================================================

/// Encodes depth and time in the value so misplaced columns show up
pub struct DepthProportional;

impl TransportModel for DepthProportional {
    fn concentration(&self, depth: f64, time: f64) -> f64 {
        depth + time / 1000.0
    }

    fn name(&self) -> &str {
        "Depth Proportional"
    }
}

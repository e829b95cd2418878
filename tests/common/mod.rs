//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{DepthProportional, PureDecay};
pub use test_helpers::{
    assert_series_close,
    create_scenario,
    default_parameters,
    parse_csv,
    relative_error,
};

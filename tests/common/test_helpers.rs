//! Helper functions for integration tests

use contam_rs::models::TransportParameters;
use contam_rs::physics::{DepthSet, TransportModel};
use contam_rs::solver::Scenario;

/// Parameters of the reference case: C₀=100 mg/L, D=10 cm²/day, k=0.01 1/day
pub fn default_parameters() -> TransportParameters {
    TransportParameters::new(100.0, 10.0, 0.01).unwrap()
}

/// Scenario for `model` at the given depths
pub fn create_scenario(model: Box<dyn TransportModel>, depths: &[f64]) -> Scenario {
    Scenario::new(model, DepthSet::new(depths.iter().copied()).unwrap())
}

/// Assert that two series are close (within tolerance) element by element
pub fn assert_series_close(actual: &[f64], expected: &[f64], tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Parse CSV text produced with the default configuration
///
/// Skips `#` comment lines; returns the header fields and the rows as numbers.
pub fn parse_csv(body: &str) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut lines = body.lines().filter(|l| !l.starts_with('#'));
    let header = lines
        .next()
        .expect("CSV has no header")
        .split(',')
        .map(str::to_string)
        .collect();
    let rows = lines
        .map(|line| {
            line.split(',')
                .map(|field| field.parse::<f64>().expect("field is not a number"))
                .collect()
        })
        .collect();
    (header, rows)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

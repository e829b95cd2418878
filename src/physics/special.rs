//! Special functions
//!
//! The transport solution needs the complementary error function
//!
//! ```text
//! erfc(x) = 1 - erf(x) = (2/√π) ∫ₓ^∞ exp(-u²) du
//! ```
//!
//! evaluated in double precision. The implementation is the fdlibm rational
//! approximation shipped by the `libm` crate (accurate to about one ulp), so
//! no precision is lost to `1 - erf(x)` cancellation for large `x`.
//!
//! For `x ≥ 28` the true value is below the smallest subnormal `f64` and the
//! result is exactly `0.0`. This is not an error.

/// Complementary error function in double precision
///
/// # Example
///
/// ```rust
/// use contam_rs::physics::special::erfc;
///
/// assert_eq!(erfc(0.0), 1.0);
/// assert!((erfc(0.5) - 0.4795001221869534).abs() < 1e-15);
/// assert_eq!(erfc(50.0), 0.0);
/// ```
#[inline]
pub fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// (x, erfc(x)) reference pairs, 16+ significant digits
    const REFERENCE: [(f64, f64); 10] = [
        (0.0, 1.0),
        (0.1, 0.8875370839817152),
        (0.5, 0.4795001221869534),
        (1.0, 0.15729920705028513),
        (1.5, 0.033894853524689274),
        (2.0, 0.004677734981047266),
        (3.0, 2.209049699858544e-5),
        (4.0, 1.541725790028002e-8),
        (5.0, 1.5374597944280349e-12),
        (10.0, 2.088487583762545e-45),
    ];

    #[test]
    fn test_erfc_matches_reference_table() {
        for (x, expected) in REFERENCE {
            let got = erfc(x);
            assert!(
                (got - expected).abs() < 1e-10,
                "erfc({x}) = {got}, expected {expected}"
            );
            if expected > 0.0 {
                assert!(((got - expected) / expected).abs() < 1e-12, "relative error at x = {x}");
            }
        }
    }

    #[test]
    fn test_erfc_at_zero_is_exactly_one() {
        assert_eq!(erfc(0.0), 1.0);
    }

    #[test]
    fn test_erfc_underflows_to_zero_without_error() {
        assert_eq!(erfc(28.0), 0.0);
        assert_eq!(erfc(50.0), 0.0);
        assert_eq!(erfc(f64::INFINITY), 0.0);

        // Just below the cutoff the value is subnormal but still finite and positive
        let tail = erfc(26.0);
        assert!(tail > 0.0 && tail < 1e-290);
    }

    #[test]
    fn test_erfc_monotonically_decreasing_on_domain() {
        let mut previous = erfc(0.0);
        for i in 1..=5000 {
            let x = i as f64 * 0.01;
            let value = erfc(x);
            assert!(value <= previous, "erfc not decreasing at x = {x}");
            assert!((0.0..=1.0).contains(&value));
            previous = value;
        }
    }

    #[test]
    fn test_erfc_negative_arguments_exceed_one() {
        // Never reached by the transport model (z, D, t ≥ 0) but part of the function
        assert!((erfc(-1.0) - (2.0 - 0.15729920705028513)).abs() < 1e-15);
    }
}

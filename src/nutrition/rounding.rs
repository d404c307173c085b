//! Display rounding
//!
//! Round-half-up with a small bias so values like 1.005 (stored as
//! 1.00499999...) still round up at the half boundary.

pub const ROUNDING_EPSILON: f64 = 1e-12;

/// Round to `decimals` places
pub fn round_n(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    ((value + ROUNDING_EPSILON) * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_n(2.5, 0), 3.0);
        assert_eq!(round_n(1738.5, 0), 1739.0);
        assert_eq!(round_n(1735.5952, 0), 1736.0);
        assert_eq!(round_n(49.94, 1), 49.9);
    }

    #[test]
    fn test_epsilon_rescues_binary_halves() {
        assert_eq!(round_n(1.005, 2), 1.01);
        assert_eq!(round_n(0.125, 2), 0.13);
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(round_n(-20.0, 1), -20.0);
        assert_eq!(round_n(0.0, 0), 0.0);
    }
}

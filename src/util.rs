//! Shared numeric and rounding utilities
//!
//! All components round with half-away-from-zero semantics (`f64::round`),
//! which for the non-negative percentages and currency amounts handled here
//! is the conventional "half up".

/// Round to one decimal place (percentage shares)
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimal places (currency amounts)
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Convert a fraction in [0, 1] to an integer percentile 0-100, half-up
pub fn percentile_from_fraction(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// One decimal place expressed in integer tenths, for drift-free
/// apportionment arithmetic
pub fn to_tenths(x: f64) -> i64 {
    (x * 10.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_half_up() {
        // 2.25 is exactly representable, so the half case is genuine
        assert_eq!(round1(2.25), 2.3);
        assert_eq!(round1(33.34), 33.3);
        assert_eq!(round1(-2.25), -2.3);
    }

    #[test]
    fn test_round2_currency() {
        assert_eq!(round2(1157.625), 1157.63);
        assert_eq!(round2(1102.5), 1102.5);
    }

    #[test]
    fn test_percentile_from_fraction() {
        assert_eq!(percentile_from_fraction(0.6), 60);
        assert_eq!(percentile_from_fraction(0.625), 63); // half-up at 62.5
        assert_eq!(percentile_from_fraction(0.0), 0);
        assert_eq!(percentile_from_fraction(1.0), 100);
    }

    #[test]
    fn test_to_tenths() {
        assert_eq!(to_tenths(2.25), 23);
        assert_eq!(to_tenths(100.0), 1000);
    }
}

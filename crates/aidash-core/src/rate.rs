//! Percentage derivation shared by every table and chart.

/// Percentage of `count` over `total`, rounded to two decimal places.
///
/// A zero `total` yields `0.0`. Use this whenever counts have been
/// re-aggregated; summing upstream rates is never correct.
pub fn rate(total: u64, count: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_zero() {
        assert_eq!(rate(0, 0), 0.0);
        assert_eq!(rate(0, 17), 0.0);
    }

    #[test]
    fn exact_values() {
        assert_eq!(rate(80, 58), 72.5);
        assert_eq!(rate(45, 32), 71.11);
        assert_eq!(rate(15, 5), 33.33);
        assert_eq!(rate(3, 2), 66.67);
        assert_eq!(rate(53, 37), 69.81);
        assert_eq!(rate(10, 10), 100.0);
    }

    #[test]
    fn matches_rounded_ratio_for_positive_totals() {
        for total in 1..=120u64 {
            for count in (0..=total).step_by(7) {
                let expected = ((count as f64 / total as f64) * 100.0 * 100.0).round() / 100.0;
                assert_eq!(rate(total, count), expected, "rate({total}, {count})");
            }
        }
    }

    #[test]
    fn round2_keeps_two_places() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(12.5), 12.5);
    }
}

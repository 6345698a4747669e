/// Number of decimal places used for every displayed measurement.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Rounds `value` to `places` decimal places, resolving ties away from zero.
///
/// The tie rule matters for values such as `0.125`, which rounds to `0.13`
/// here but to `0.12` under round-half-to-even.
///
/// Values too large to scale by `10^places` are returned unchanged; at that
/// magnitude an `f64` has no fractional digits left to round.
#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Rounds `value` to [`DISPLAY_DECIMALS`] places.
#[must_use]
pub fn round_display(value: f64) -> f64 {
    round_to_places(value, DISPLAY_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn ties_round_away_from_zero() {
        assert_abs_diff_eq!(round_display(0.125), 0.13);
        assert_abs_diff_eq!(round_display(-0.125), -0.13);
        assert_abs_diff_eq!(round_to_places(2.5, 0), 3.0);
        assert_abs_diff_eq!(round_to_places(-2.5, 0), -3.0);
    }

    #[test]
    fn non_ties_round_to_nearest() {
        assert_abs_diff_eq!(round_display(3.0 * 3f64.sqrt()), 5.20);
        assert_abs_diff_eq!(round_display(3.0 * 2f64.sqrt()), 4.24);
        assert_abs_diff_eq!(round_display(29f64.sqrt()), 5.39);
    }

    #[test]
    fn whole_numbers_are_unchanged() {
        assert_abs_diff_eq!(round_display(27.0), 27.0);
        assert_abs_diff_eq!(round_display(8000.0), 8000.0);
    }

    #[test]
    fn huge_values_stay_finite() {
        for value in [1.8e306, 1e308, f64::MAX, -f64::MAX] {
            let rounded = round_display(value);
            assert!(rounded.is_finite(), "value = {value:e}");
            assert_eq!(rounded.to_bits(), value.to_bits());
        }
        // Largest magnitude that still scales by 100 without overflowing.
        let edge = f64::MAX / 100.0;
        let rounded = round_display(edge);
        assert!(rounded.is_finite());
        assert_relative_eq!(rounded, edge, max_relative = 1e-12);
    }

    #[test]
    fn large_integral_values_are_unchanged() {
        assert_eq!(round_display(1e20).to_bits(), 1e20f64.to_bits());
        assert_eq!(round_display(-4.5e15).to_bits(), (-4.5e15f64).to_bits());
    }

    #[test]
    fn rounding_is_idempotent() {
        let once = round_display(17.326_5);
        assert_eq!(once.to_bits(), round_display(once).to_bits());
    }
}

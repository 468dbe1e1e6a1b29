//! Shared rounding helpers for tax calculations.

use rust_decimal::Decimal;

/// Rounds a monetary amount to two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, the standard financial
/// convention.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use simples_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(8660.455)), dec!(8660.46));
/// assert_eq!(round_half_up(dec!(8660.454)), dec!(8660.45));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage rate to four decimal places using half-up rounding.
///
/// Rates keep two more places than money so that small effective-rate
/// differences between nearby revenues survive rounding.
pub fn round_rate_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_rounds_away_from_zero_for_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(8660.00));

        assert_eq!(result, dec!(8660.00));
    }

    #[test]
    fn round_rate_half_up_keeps_four_places() {
        let result = round_rate_half_up(dec!(4.333333));

        assert_eq!(result, dec!(4.3333));
    }

    #[test]
    fn round_rate_half_up_rounds_up_at_midpoint() {
        let result = round_rate_half_up(dec!(4.33335));

        assert_eq!(result, dec!(4.3334));
    }
}

//! Shared rounding and clamping helpers for the computation pipeline.
//!
//! All amounts in the pipeline are whole rupees; these helpers keep them
//! that way after percentage multiplications and the statutory
//! round-to-ten step.

use rust_decimal::Decimal;

/// Rounds to a whole rupee, half away from zero.
///
/// Applied after every percentage multiplication (5%, 20%, 4%) so that no
/// fractional paise survive into the record.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pagar_core::calculations::common::round_rupee;
///
/// assert_eq!(round_rupee(dec!(6172.5)), dec!(6173));
/// assert_eq!(round_rupee(dec!(6172.4)), dec!(6172));
/// assert_eq!(round_rupee(dec!(-10.5)), dec!(-11)); // away from zero
/// ```
pub fn round_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a non-negative amount to the nearest ten rupees.
///
/// This is the taxable-income rounding step: always down, never to
/// nearest.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pagar_core::calculations::common::floor_to_ten;
///
/// assert_eq!(floor_to_ten(dec!(123456)), dec!(123450));
/// assert_eq!(floor_to_ten(dec!(123459)), dec!(123450));
/// assert_eq!(floor_to_ten(dec!(123450)), dec!(123450));
/// ```
pub fn floor_to_ten(value: Decimal) -> Decimal {
    (value / Decimal::TEN).floor() * Decimal::TEN
}

/// Clamps a value to zero from below.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}

//! Common utility functions for payslip calculations.
//!
//! Shared helpers used across the calculation and policy modules, mainly
//! the currency quantization applied to every amount that leaves the crate.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard currency rounding where values at exactly 0.005 are
/// rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(200090.454)), dec!(200090.45));
/// assert_eq!(round_half_up(dec!(200090.455)), dec!(200090.46));
/// assert_eq!(round_half_up(dec!(10.05)), dec!(10.05));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the smaller of two decimal values.
///
/// The band walk consumes `min(remaining salary, band width)` from each band.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::common::min;
///
/// assert_eq!(min(dec!(300000.00), dec!(500000.00)), dec!(300000.00));
/// assert_eq!(min(dec!(500000.00), dec!(300000.00)), dec!(300000.00));
/// ```
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

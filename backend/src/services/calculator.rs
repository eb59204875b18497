//! UFR computation.
//!
//! Arithmetic and rounding happen on [`Decimal`] values so that a decimal
//! tie such as `13.005` rounds up even when the nearest `f64` lies just below
//! it.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::models::UfrInput;

/// Number of decimals kept on every computed UFR.
pub const UFR_DECIMALS: u32 = 2;

/// Compute the ultrafiltration rate in ml/kg/hr, rounded to two decimals.
///
/// `ufr = (liters * 1000) / (weight_kg * hours)`, which in decimal
/// arithmetic is exactly `ml / (weight_kg * hours)`. The exact rate is fixed
/// by the validator, so the result is always finite.
pub fn compute(input: &UfrInput) -> f64 {
    to_f64(round_half_up(input.exact_rate(), UFR_DECIMALS))
}

/// Round to `decimals` places with ties going away from zero.
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// The decimal written by the shortest text of `value`.
///
/// `None` when that decimal does not fit in 96 bits.
pub fn as_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string()).ok()
}

fn to_f64(value: Decimal) -> f64 {
    // Decimal text always parses; 8.93 becomes the f64 literal 8.93.
    value.to_string().parse().unwrap_or_default()
}

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};

/// Converts an allocated amount into a `Decimal` rounded for display.
///
/// Allocation math runs in `f64`; this is only for presenting results.
/// NaN, infinities and values outside the `Decimal` range are rejected.
pub fn to_display_amount(amount: f64) -> Result<Decimal> {
    let decimal = Decimal::from_f64_retain(amount).ok_or_else(|| {
        ValidationError::InvalidAmount(format!("{} cannot be represented as a decimal", amount))
    })?;
    Ok(decimal.round_dp(DISPLAY_DECIMAL_PRECISION))
}

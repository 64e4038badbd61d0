//! Conversions between decimal amounts and the integer minor units stored in the database.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::server::error::AppError;

/// Number of fractional digits kept for every monetary amount.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to two fractional digits, midpoints away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Converts a stored minor unit value (cents) into a decimal amount.
pub fn from_minor_units(minor_units: i64) -> Decimal {
    Decimal::new(minor_units, MONEY_SCALE)
}

/// Converts a decimal amount into minor units, rounding to two fractional digits.
///
/// # Returns
/// - `Ok(i64)` - Amount in minor units
/// - `Err(AppError::Validation)` - Amount does not fit in 64 bits
pub fn to_minor_units(amount: Decimal) -> Result<i64, AppError> {
    i64::try_from(round_money(amount).mantissa())
        .map_err(|_| AppError::Validation(format!("Amount {} is out of range", amount)))
}

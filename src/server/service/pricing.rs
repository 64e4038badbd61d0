//! Booking price calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::server::util::money::round_money;

/// Number of nights between two calendar dates.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Computes the total price of a stay as `nights × nightly_rate`, rounded to two
/// fractional digits.
///
/// Callers must reject stays with zero or negative nights before pricing them.
pub fn compute_price(check_in: NaiveDate, check_out: NaiveDate, nightly_rate: Decimal) -> Decimal {
    round_money(Decimal::from(nights(check_in, check_out)) * nightly_rate)
}

//! Half-up rounding of `f64` values to a fixed number of decimals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` half-up to `dp` decimal places.
///
/// The value is taken at its shortest round-trip decimal form first, so
/// `1.005` is treated as exactly `1.005` and becomes `1.01` rather than
/// falling to `1.00` through its binary representation.
#[must_use]
pub fn round_half_up(value: f64, dp: u32) -> Decimal {
    let exact = value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
        .unwrap_or(Decimal::ZERO);

    let mut rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

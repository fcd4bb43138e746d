//! Ship rating.
//!
//! ```text
//! rating = round_half_up(80 * speed * k / (3019 - year + 1), 2)      k = 0.5 if used, else 1
//! ```
//!
//! The quotient is computed in `f64`. The resulting double is then converted
//! to a decimal keeping its full binary expansion and rounded half-up (ties
//! away from zero) to two places. Going through the exact value matters: a
//! double printed as `0.145` is really `0.14499999…` and rounds down.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Latest production year a ship may have. Also the anchor of the rating curve.
pub const CURRENT_YEAR: i32 = 3019;

const BASE: f64 = 80.0;
const USED_FACTOR: f64 = 0.5;
const SCALE: u32 = 2;

/// Computes the rating. Total for every `prod_year <= CURRENT_YEAR`.
pub fn rating(speed: f64, is_used: bool, prod_year: i32) -> f64 {
    let usage = if is_used { USED_FACTOR } else { 1.0 };
    let divisor = f64::from(CURRENT_YEAR - prod_year + 1);
    round_half_up(BASE * speed * usage / divisor, SCALE)
}

/// Rounds `value` half-up to `scale` decimal places using its exact decimal expansion.
pub fn round_half_up(value: f64, scale: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

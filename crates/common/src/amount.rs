//! Conversion of a JPY budget into an order quantity.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Invalid inputs to [`calc_amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("price must be positive, got {0}")]
    NonPositivePrice(i64),

    #[error("granularity must be positive, got {0}")]
    NonPositiveGranularity(i64),

    #[error("budget must not be negative, got {0}")]
    NegativeBudget(i64),

    #[error("amount overflow for budget {budget} at granularity {granularity}")]
    Overflow { budget: i64, granularity: i64 },
}

/// Compute `round(budget / price * granularity) / granularity`.
///
/// `granularity` is the inverse of the exchange's minimum order increment
/// (10_000 means 0.0001). Rounding is half away from zero. For power-of-ten
/// granularities the result carries exactly that many decimal places, so
/// `10_000` yields values such as `0.1000`.
///
/// A zero result is valid and means the budget is below half a lot.
pub fn calc_amount(price: i64, budget: i64, granularity: i64) -> Result<Decimal, AmountError> {
    if price <= 0 {
        return Err(AmountError::NonPositivePrice(price));
    }
    if granularity <= 0 {
        return Err(AmountError::NonPositiveGranularity(granularity));
    }
    if budget < 0 {
        return Err(AmountError::NegativeBudget(budget));
    }

    let granularity_dec = Decimal::from(granularity);

    // Multiply before dividing to stay exact for integer inputs.
    let lots = Decimal::from(budget)
        .checked_mul(granularity_dec)
        .ok_or(AmountError::Overflow {
            budget,
            granularity,
        })?
        / Decimal::from(price);
    let lots = lots.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let mut amount = lots / granularity_dec;
    match power_of_ten_scale(granularity) {
        Some(scale) => amount.rescale(scale),
        None => amount = amount.normalize(),
    }

    Ok(amount)
}

/// Number of decimal places for a power-of-ten granularity.
fn power_of_ten_scale(granularity: i64) -> Option<u32> {
    let mut value = granularity;
    let mut scale = 0;
    while value > 1 && value % 10 == 0 {
        value /= 10;
        scale += 1;
    }
    (value == 1).then_some(scale)
}

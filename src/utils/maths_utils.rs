use alloy_primitives::U256;
use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::error::{FeeError, FeeResult};

/// Converts a raw token-native integer into a decimal quantity with `decimals` places.
/// Exact, no float round trip.
pub fn format_units(value: U256, decimals: u32) -> FeeResult<Decimal> {
    let raw = u128::try_from(value)
        .ok()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or_else(|| FeeError::Amount(format!("{} does not fit in 127 bits", value)))?;

    Decimal::try_from_i128_with_scale(raw, decimals).map_err(|e| {
        FeeError::Amount(format!("{} with {} decimals: {}", value, decimals, e))
    })
}

/// USD prices come from the price service as floats. Reject anything that is not a finite,
/// non-negative number.
pub fn price_to_decimal(price: f64) -> FeeResult<Decimal> {
    if !price.is_finite() || price < 0.0 {
        return Err(FeeError::Amount(format!("invalid price {}", price)));
    }
    Decimal::from_f64(price).ok_or_else(|| FeeError::Amount(format!("invalid price {}", price)))
}

pub(crate) fn checked_mul(a: Decimal, b: Decimal) -> FeeResult<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| FeeError::Amount(format!("overflow multiplying {} by {}", a, b)))
}

pub(crate) fn checked_add(a: Decimal, b: Decimal) -> FeeResult<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| FeeError::Amount(format!("overflow adding {} to {}", b, a)))
}

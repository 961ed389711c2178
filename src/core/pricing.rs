use crate::models::{DeliveryCharges, DeliverySpecs, DistanceRange};
use thiserror::Error;

/// Errors raised while pricing a delivery
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("The delivery distance is too large! Delivery not possible! (distance: {distance} m)")]
    DistanceExceeded { distance: i64 },
    #[error("Total price overflows for cart value {cart_value}")]
    TotalOverflow { cart_value: i64 },
}

/// Evaluate the delivery fee and small order surcharge for an order
///
/// The pricing table is scanned in order and the first range containing
/// `distance` wins. The last entry of the table is a terminator row (its
/// `max` is typically 0) and is never matched, so a table with zero or one
/// entries can never price a delivery.
///
/// Fee: `round(base_price + a + b * distance / 10)`.
/// Surcharge: `round(order_minimum_no_surcharge - cart_value)` when the cart
/// is below the minimum, otherwise 0.
///
/// Both are rounded half-to-even.
pub fn evaluate(
    cart_value: i64,
    distance: i64,
    specs: &DeliverySpecs,
) -> Result<DeliveryCharges, PricingError> {
    let range = matching_range(&specs.distance_ranges, distance)
        .ok_or(PricingError::DistanceExceeded { distance })?;

    Ok(DeliveryCharges {
        fee: delivery_fee(specs.base_price, range, distance),
        surcharge: small_order_surcharge(specs.order_minimum_no_surcharge, cart_value),
    })
}

/// First non-terminal range containing `distance`
pub fn matching_range(ranges: &[DistanceRange], distance: i64) -> Option<&DistanceRange> {
    let scanned = ranges.len().saturating_sub(1);
    ranges[..scanned].iter().find(|range| range.contains(distance))
}

#[inline]
pub fn delivery_fee(base_price: f64, range: &DistanceRange, distance: i64) -> i64 {
    (base_price + range.a + range.b * distance as f64 / 10.0).round_ties_even() as i64
}

#[inline]
pub fn small_order_surcharge(order_minimum_no_surcharge: f64, cart_value: i64) -> i64 {
    let cart_value = cart_value as f64;
    if order_minimum_no_surcharge > cart_value {
        (order_minimum_no_surcharge - cart_value).round_ties_even() as i64
    } else {
        0
    }
}

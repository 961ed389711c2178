use crate::core::{distance::delivery_distance, pricing::{evaluate, PricingError}};
use crate::models::{Coordinate, DeliverySpecs, OrderQuote, OrderQuoteRequest};

/// Price an order once the venue's location and pricing rules are known
///
/// # Pipeline Stages
/// 1. Straight-line distance between user and venue
/// 2. Delivery fee from the distance-banded pricing table
/// 3. Small order surcharge
/// 4. Total = cart value + surcharge + fee
pub fn quote_order(
    request: &OrderQuoteRequest,
    venue_location: Coordinate,
    specs: &DeliverySpecs,
) -> Result<OrderQuote, PricingError> {
    let distance = delivery_distance(request.user_location, venue_location);
    let charges = evaluate(request.cart_value, distance, specs)?;
    let total_price = request
        .cart_value
        .checked_add(charges.surcharge)
        .and_then(|total| total.checked_add(charges.fee))
        .ok_or(PricingError::TotalOverflow {
            cart_value: request.cart_value,
        })?;

    Ok(OrderQuote {
        total_price,
        small_order_surcharge: charges.surcharge,
        cart_value: request.cart_value,
        delivery_fee: charges.fee,
        distance,
    })
}

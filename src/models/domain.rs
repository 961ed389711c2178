use serde::{Deserialize, Serialize};

/// Geographic point in degrees
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]. The type
/// does not enforce this; inbound coordinates are range-checked by the
/// request validation before one is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a coordinate from the venue API's `[longitude, latitude]` pair
    pub fn from_lon_lat(pair: [f64; 2]) -> Self {
        let [longitude, latitude] = pair;
        Self { latitude, longitude }
    }
}

/// One band of the distance-based pricing table
///
/// `min` is inclusive and `max` exclusive, both in meters. The fee inside the
/// band is `base_price + a + b * distance / 10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
    pub a: f64,
    pub b: f64,
}

impl DistanceRange {
    pub fn new(min: f64, max: f64, a: f64, b: f64) -> Self {
        Self { min, max, a, b }
    }

    #[inline]
    pub fn contains(&self, distance: i64) -> bool {
        let distance = distance as f64;
        distance >= self.min && distance < self.max
    }
}

/// Delivery pricing rules of a venue, fetched fresh for every quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliverySpecs {
    pub order_minimum_no_surcharge: f64,
    pub base_price: f64,
    pub distance_ranges: Vec<DistanceRange>,
}

/// Fee and surcharge produced by the pricing evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryCharges {
    pub fee: i64,
    pub surcharge: i64,
}

/// Validated input of a price quote
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuoteRequest {
    pub venue_slug: String,
    pub cart_value: i64,
    pub user_location: Coordinate,
}

/// Final price breakdown for one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuote {
    pub total_price: i64,
    pub small_order_surcharge: i64,
    pub cart_value: i64,
    pub delivery_fee: i64,
    pub distance: i64,
}

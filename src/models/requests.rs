use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::Validate;

use crate::models::domain::{Coordinate, OrderQuoteRequest};

/// Query string of the delivery order price endpoint
///
/// Every field is kept as the raw string it arrived as, so that a missing or
/// unparseable parameter is reported together with the other invalid ones
/// instead of failing the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryOrderPriceQuery {
    pub venue_slug: Option<String>,
    pub cart_value: Option<String>,
    pub user_lat: Option<String>,
    pub user_lon: Option<String>,
}

#[derive(Debug, Validate)]
struct QuoteParams {
    #[validate(required, length(min = 1))]
    venue_slug: Option<String>,
    #[validate(required, range(min = 0))]
    cart_value: Option<i64>,
    #[validate(required, range(min = -90.0, max = 90.0))]
    user_lat: Option<f64>,
    #[validate(required, range(min = -180.0, max = 180.0))]
    user_lon: Option<f64>,
}

/// Parse a raw parameter, recording it under `field` when it does not parse
fn parse_field<T: FromStr>(
    field: &str,
    raw: Option<&str>,
    unparseable: &mut BTreeMap<String, Value>,
) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            unparseable.insert(field.to_string(), Value::from(raw));
            None
        }
    }
}

/// Like [`parse_field`] but rejects NaN and infinities, which slip through
/// the range checks
fn parse_coordinate(
    field: &str,
    raw: Option<&str>,
    unparseable: &mut BTreeMap<String, Value>,
) -> Option<f64> {
    match parse_field::<f64>(field, raw, unparseable) {
        Some(value) if !value.is_finite() => {
            unparseable.insert(field.to_string(), Value::from(raw.unwrap_or_default()));
            None
        }
        value => value,
    }
}

impl DeliveryOrderPriceQuery {
    /// Validate the query and turn it into an [`OrderQuoteRequest`]
    ///
    /// On failure returns every offending parameter mapped to the value it
    /// was received with: the parsed value when out of range, the raw string
    /// when it could not be parsed, `null` when missing.
    pub fn into_quote_request(self) -> Result<OrderQuoteRequest, BTreeMap<String, Value>> {
        let mut unparseable = BTreeMap::new();
        let params = QuoteParams {
            cart_value: parse_field("cart_value", self.cart_value.as_deref(), &mut unparseable),
            user_lat: parse_coordinate("user_lat", self.user_lat.as_deref(), &mut unparseable),
            user_lon: parse_coordinate("user_lon", self.user_lon.as_deref(), &mut unparseable),
            venue_slug: self.venue_slug,
        };

        let invalid: Vec<String> = match params.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect(),
        };

        match params {
            QuoteParams {
                venue_slug: Some(venue_slug),
                cart_value: Some(cart_value),
                user_lat: Some(lat),
                user_lon: Some(lon),
            } if invalid.is_empty() && unparseable.is_empty() => Ok(OrderQuoteRequest {
                venue_slug,
                cart_value,
                user_location: Coordinate::new(lat, lon),
            }),
            params => {
                let mut received = unparseable;
                for field in invalid {
                    if received.contains_key(&field) {
                        continue;
                    }
                    let value = match field.as_str() {
                        "venue_slug" => params.venue_slug.as_deref().map(Value::from),
                        "cart_value" => params.cart_value.map(Value::from),
                        "user_lat" => params.user_lat.map(Value::from),
                        "user_lon" => params.user_lon.map(Value::from),
                        _ => None,
                    };
                    received.insert(field, value.unwrap_or(Value::Null));
                }
                Err(received)
            }
        }
    }
}

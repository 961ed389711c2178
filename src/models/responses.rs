use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::domain::OrderQuote;

/// Response for the delivery order price endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOrderPriceResponse {
    pub total_price: i64,
    pub small_order_surcharge: i64,
    pub cart_value: i64,
    pub delivery: DeliveryBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryBreakdown {
    pub fee: i64,
    pub distance: i64,
}

impl From<OrderQuote> for DeliveryOrderPriceResponse {
    fn from(quote: OrderQuote) -> Self {
        Self {
            total_price: quote.total_price,
            small_order_surcharge: quote.small_order_surcharge,
            cart_value: quote.cart_value,
            delivery: DeliveryBreakdown {
                fee: quote.delivery_fee,
                distance: quote.distance,
            },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_parameters: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            invalid_parameters: None,
            hint: None,
        }
    }
}

//! DOPC - Delivery Order Price Calculator
//!
//! Prices a delivery from a venue to a user: fetches the venue's location and
//! pricing rules from the venue API, measures the straight-line distance and
//! applies the venue's distance-banded fee table and small order surcharge.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{quote_order, evaluate, PricingError, distance::{haversine_distance, delivery_distance}};
pub use error::ApiError;
pub use models::{Coordinate, DistanceRange, DeliverySpecs, DeliveryCharges, OrderQuote, OrderQuoteRequest};
pub use services::{VenueApiClient, VenueApiError};

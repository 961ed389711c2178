// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, DistanceRange, DeliverySpecs, DeliveryCharges, OrderQuoteRequest, OrderQuote};
pub use requests::DeliveryOrderPriceQuery;
pub use responses::{DeliveryOrderPriceResponse, DeliveryBreakdown, HealthResponse, ErrorResponse};

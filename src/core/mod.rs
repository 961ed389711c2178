// Core pricing exports
pub mod distance;
pub mod pricing;
pub mod quote;

pub use distance::{haversine_distance, delivery_distance, EARTH_RADIUS_M};
pub use pricing::{evaluate, PricingError};
pub use quote::quote_order;

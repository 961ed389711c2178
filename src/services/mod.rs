// Service exports
pub mod venue_api;

pub use venue_api::{VenueApiClient, VenueApiError};

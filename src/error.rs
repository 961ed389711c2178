use actix_web::{error, http::StatusCode, HttpResponse};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::core::PricingError;
use crate::models::ErrorResponse;
use crate::services::VenueApiError;

pub const INVALID_PARAMETERS_MESSAGE: &str =
    "Invalid request. One or more parameters are missing or invalid.";
pub const INVALID_PARAMETERS_HINT: &str = "Please ensure to use correct parameter values";
pub const DISTANCE_EXCEEDED_MESSAGE: &str =
    "Invalid request! Delivery distance is too large! Delivery not possible!";

/// Errors surfaced by the HTTP API
///
/// Every variant is terminal for the request and renders as a JSON
/// [`ErrorResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request. One or more parameters are missing or invalid.")]
    Validation { invalid_parameters: BTreeMap<String, Value> },

    #[error("Invalid query: {0}")]
    BadQuery(String),

    #[error("Error fetching data from the venue API. Please check the value of venue_slug.")]
    VenueNotFound { status: u16 },

    #[error("Error during request to the venue API: {0}")]
    UpstreamUnavailable(String),

    #[error("Invalid request! Delivery distance is too large! Delivery not possible!")]
    DistanceExceeded,
}

impl From<VenueApiError> for ApiError {
    fn from(err: VenueApiError) -> Self {
        match err {
            VenueApiError::VenueNotFound { status, .. } => ApiError::VenueNotFound {
                status: status.as_u16(),
            },
            other => ApiError::UpstreamUnavailable(other.to_string()),
        }
    }
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::DistanceExceeded { .. } => ApiError::DistanceExceeded,
            PricingError::TotalOverflow { cart_value } => {
                let mut invalid_parameters = BTreeMap::new();
                invalid_parameters.insert("cart_value".to_string(), Value::from(cart_value));
                ApiError::Validation { invalid_parameters }
            }
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadQuery(_) | ApiError::DistanceExceeded => {
                StatusCode::BAD_REQUEST
            }
            ApiError::VenueNotFound { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::NOT_FOUND)
            }
            ApiError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation { invalid_parameters } => ErrorResponse {
                message: self.to_string(),
                invalid_parameters: Some(invalid_parameters.clone()),
                hint: Some(INVALID_PARAMETERS_HINT.to_string()),
            },
            ApiError::BadQuery(_) => ErrorResponse {
                hint: Some(INVALID_PARAMETERS_HINT.to_string()),
                ..ErrorResponse::message(self.to_string())
            },
            _ => ErrorResponse::message(self.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::BadQuery(err.to_string()).into()
}

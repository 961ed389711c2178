use actix_web::{web, HttpResponse, Responder};
use crate::core::quote_order;
use crate::error::ApiError;
use crate::models::{DeliveryOrderPriceQuery, DeliveryOrderPriceResponse, HealthResponse};
use crate::services::VenueApiClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub venue_api: Arc<VenueApiClient>,
}

/// Configure delivery pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/delivery-order-price", web::get().to(delivery_order_price));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Delivery order price endpoint
///
/// GET /api/v1/delivery-order-price?venue_slug=&cart_value=&user_lat=&user_lon=
///
/// Response body:
/// ```json
/// {
///   "total_price": 1190,
///   "small_order_surcharge": 0,
///   "cart_value": 1000,
///   "delivery": { "fee": 190, "distance": 177 }
/// }
/// ```
async fn delivery_order_price(
    state: web::Data<AppState>,
    query: web::Query<DeliveryOrderPriceQuery>,
) -> Result<HttpResponse, ApiError> {
    let request = query.into_inner().into_quote_request().map_err(|invalid_parameters| {
        tracing::error!(
            "Received request at delivery-order-price with invalid params: {:?}",
            invalid_parameters
        );
        ApiError::Validation { invalid_parameters }
    })?;

    let slug = request.venue_slug.as_str();
    tracing::info!(
        "Pricing order for venue: {}, cart_value: {}",
        slug,
        request.cart_value
    );

    let venue_location = state.venue_api.fetch_venue_location(slug).await.map_err(|e| {
        tracing::error!("Failed to fetch location for venue {}: {}", slug, e);
        ApiError::from(e)
    })?;

    let specs = state.venue_api.fetch_delivery_specs(slug).await.map_err(|e| {
        tracing::error!("Failed to fetch delivery specs for venue {}: {}", slug, e);
        ApiError::from(e)
    })?;

    let quote = quote_order(&request, venue_location, &specs).map_err(|e| {
        tracing::error!("Cannot deliver from venue {}: {}", slug, e);
        ApiError::from(e)
    })?;

    tracing::info!(
        "Quoted venue {}: total_price={}, fee={}, surcharge={}, distance={}m",
        slug,
        quote.total_price,
        quote.delivery_fee,
        quote.small_order_surcharge,
        quote.distance
    );

    Ok(HttpResponse::Ok().json(DeliveryOrderPriceResponse::from(quote)))
}

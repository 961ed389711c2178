use crate::models::{Coordinate, DeliverySpecs, DistanceRange};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the venue API
#[derive(Debug, Error)]
pub enum VenueApiError {
    #[error("Venue '{slug}' not found (upstream returned {status})")]
    VenueNotFound { slug: String, status: StatusCode },

    #[error("Venue API unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Venue API client
///
/// Fetches the two documents a quote needs:
/// - `<base>/<slug>/static` for the venue location
/// - `<base>/<slug>/dynamic` for the delivery pricing rules
///
/// Every call is a single attempt bounded by the configured timeouts.
#[derive(Debug, Clone)]
pub struct VenueApiClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct StaticEnvelope {
    venue_raw: StaticVenue,
}

#[derive(Debug, Deserialize)]
struct StaticVenue {
    location: VenueLocation,
}

#[derive(Debug, Deserialize)]
struct VenueLocation {
    /// GeoJSON order: `[longitude, latitude]`
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct DynamicEnvelope {
    venue_raw: DynamicVenue,
}

#[derive(Debug, Deserialize)]
struct DynamicVenue {
    delivery_specs: RawDeliverySpecs,
}

#[derive(Debug, Deserialize)]
struct RawDeliverySpecs {
    order_minimum_no_surcharge: f64,
    delivery_pricing: RawDeliveryPricing,
}

#[derive(Debug, Deserialize)]
struct RawDeliveryPricing {
    base_price: f64,
    distance_ranges: Vec<DistanceRange>,
}

impl From<RawDeliverySpecs> for DeliverySpecs {
    fn from(raw: RawDeliverySpecs) -> Self {
        Self {
            order_minimum_no_surcharge: raw.order_minimum_no_surcharge,
            base_price: raw.delivery_pricing.base_price,
            distance_ranges: raw.delivery_pricing.distance_ranges,
        }
    }
}

impl VenueApiClient {
    /// Create a new venue API client
    ///
    /// `timeout` bounds each whole request, `connect_timeout` the TCP/TLS
    /// handshake.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, VenueApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!("dopc/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the venue's static document
    pub fn static_url(&self, venue_slug: &str) -> String {
        self.venue_url(venue_slug, "static")
    }

    /// URL of the venue's dynamic document
    pub fn dynamic_url(&self, venue_slug: &str) -> String {
        self.venue_url(venue_slug, "dynamic")
    }

    fn venue_url(&self, venue_slug: &str, document: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(venue_slug),
            document
        )
    }

    /// Fetch the venue's coordinates
    pub async fn fetch_venue_location(&self, venue_slug: &str) -> Result<Coordinate, VenueApiError> {
        let url = self.static_url(venue_slug);
        let envelope: StaticEnvelope = self.get_json(venue_slug, &url).await?;

        Ok(Coordinate::from_lon_lat(envelope.venue_raw.location.coordinates))
    }

    /// Fetch the venue's delivery pricing rules
    pub async fn fetch_delivery_specs(&self, venue_slug: &str) -> Result<DeliverySpecs, VenueApiError> {
        let url = self.dynamic_url(venue_slug);
        let envelope: DynamicEnvelope = self.get_json(venue_slug, &url).await?;

        Ok(envelope.venue_raw.delivery_specs.into())
    }

    async fn get_json<T>(&self, venue_slug: &str, url: &str) -> Result<T, VenueApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!("Fetching venue document from: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Request to {} failed for slug {}: {}", url, venue_slug, e);
            VenueApiError::RequestError(e)
        })?;

        let status = response.status();
        if status.is_client_error() {
            tracing::error!("{} returned {} for slug: {}", url, status, venue_slug);
            return Err(VenueApiError::VenueNotFound {
                slug: venue_slug.to_string(),
                status,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("{} returned {} for slug {}: {}", url, status, venue_slug, body);
            return Err(VenueApiError::Unavailable(format!(
                "{} returned {}",
                url, status
            )));
        }

        tracing::info!("{} returned {} for slug: {}", url, status, venue_slug);

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("Unexpected document from {} for slug {}: {}", url, venue_slug, e);
            VenueApiError::InvalidResponse(format!("Failed to parse {}: {}", url, e))
        })
    }
}

//! Address normalization collaborator.
//!
//! The rules core treats this as an opaque function: free-text address in,
//! normalized address out, or a failure. The production implementation talks
//! to a Nominatim-style geocoding endpoint; tests inject a fake through the
//! same trait.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("address could not be resolved: {0}")]
    Unresolvable(String),

    #[error("location service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait LocationValidator: Send + Sync {
    /// Returns the normalized form of the address, which may differ textually
    /// from the input (e.g. appended state or country qualifiers).
    async fn validate(&self, address: &str) -> Result<String, LocationError>;
}

/// Geocoding client against a Nominatim-compatible `/search` endpoint.
pub struct GeocodingClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct Place {
    display_name: String,
}

impl GeocodingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("gather-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl LocationValidator for GeocodingClient {
    async fn validate(&self, address: &str) -> Result<String, LocationError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));

        let places: Vec<Place> = self
            .http
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| LocationError::Unavailable(e.to_string()))?
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        match places.into_iter().next() {
            Some(place) => Ok(place.display_name),
            None => Err(LocationError::Unresolvable(address.to_string())),
        }
    }
}

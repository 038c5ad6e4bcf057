//! Maps HTTP client.
//!
//! Provides async methods for the three Google Maps web services the
//! lookup needs: Geocoding, Places Nearby Search and Distance Matrix.
//! Handles authentication, timeouts, status checks and conversion to
//! domain types.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{Candidate, Location, TravelEstimate, TravelMode};

use super::convert::{convert_distance_matrix, convert_geocode, convert_places};
use super::error::MapsError;
use super::types::{
    DistanceMatrixResponse, GeocodeResponse, NearbySearchResponse, STATUS_OK, STATUS_ZERO_RESULTS,
};

/// Default base URL for the Maps web services.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Place type used for nearby search.
const PLACE_TYPE: &str = "restaurant";

/// Configuration for the Maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Google Maps)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Maps web services client.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MapsClient {
    /// Create a new Maps client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// GET `{base_url}/{path}` with the API key attached and decode the body.
    ///
    /// Non-success HTTP statuses become `ApiError` carrying the body text.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MapsError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MapsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Resolve a free-form address (usually a postal code) to the
    /// provider's first match.
    pub async fn geocode(&self, address: &str) -> Result<Location, MapsError> {
        let resp: GeocodeResponse = self
            .get_json("geocode/json", &[("address", address.to_string())])
            .await?;

        let found_nothing = resp.status == STATUS_ZERO_RESULTS
            || (resp.status == STATUS_OK && resp.results.is_empty());
        if found_nothing {
            return Err(MapsError::NotFound {
                address: address.to_string(),
            });
        }

        if resp.status != STATUS_OK {
            return Err(MapsError::Status {
                status: resp.status,
                message: resp.error_message,
            });
        }

        let location = convert_geocode(&resp).map_err(|e| MapsError::Json {
            message: e.to_string(),
            body: None,
        })?;
        debug!(%address, %location, "geocoded");
        Ok(location)
    }

    /// Search for restaurants within `radius_m` meters of `origin`.
    ///
    /// Only the first page is read, truncated to `limit`. A provider
    /// status other than `OK` yields an empty list, not an error.
    pub async fn nearby_restaurants(
        &self,
        origin: Location,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<Candidate>, MapsError> {
        let resp: NearbySearchResponse = self
            .get_json(
                "place/nearbysearch/json",
                &[
                    ("location", origin.to_string()),
                    ("radius", radius_m.to_string()),
                    ("type", PLACE_TYPE.to_string()),
                ],
            )
            .await?;

        match resp.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Ok(Vec::new()),
            other => {
                warn!(
                    status = other,
                    message = resp.error_message.as_deref().unwrap_or(""),
                    "nearby search returned no usable results"
                );
                return Ok(Vec::new());
            }
        }

        if resp.next_page_token.is_some() {
            debug!("nearby search has more pages; only the first is used");
        }

        Ok(convert_places(&resp, limit))
    }

    /// Travel times from `origin` to each of `destinations` by `mode`.
    ///
    /// The result is aligned by index with `destinations`. All
    /// destinations go in one request.
    pub async fn distance_matrix(
        &self,
        origin: Location,
        destinations: &[Location],
        mode: TravelMode,
    ) -> Result<Vec<TravelEstimate>, MapsError> {
        if destinations.is_empty() {
            return Ok(Vec::new());
        }

        let destinations_param = destinations
            .iter()
            .map(Location::to_string)
            .collect::<Vec<_>>()
            .join("|");

        let resp: DistanceMatrixResponse = self
            .get_json(
                "distancematrix/json",
                &[
                    ("origins", origin.to_string()),
                    ("destinations", destinations_param),
                    ("mode", mode.as_str().to_string()),
                ],
            )
            .await?;

        if resp.status != STATUS_OK {
            return Err(MapsError::Status {
                status: resp.status,
                message: resp.error_message,
            });
        }

        convert_distance_matrix(&resp, destinations.len()).map_err(|e| MapsError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}

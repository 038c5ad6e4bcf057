//! Maps API response DTOs.
//!
//! These types map directly to the Google Maps web service JSON responses.
//! Fields we do not read are left out. Anything the provider may omit is
//! an `Option` or defaults to empty, so a sparse body still deserializes
//! and validation happens during conversion.

use serde::Deserialize;

/// Provider status meaning the call succeeded.
pub const STATUS_OK: &str = "OK";

/// Provider status meaning the call succeeded but matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Response from the Geocoding API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Human-readable reason accompanying a failure status.
    pub error_message: Option<String>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,

    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Response from the Places Nearby Search API.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,

    #[serde(default)]
    pub results: Vec<PlaceResult>,

    pub error_message: Option<String>,

    /// Token for the next page. Present when more than one page matched.
    pub next_page_token: Option<String>,
}

/// A single place from nearby search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub name: Option<String>,

    pub geometry: Option<Geometry>,

    /// Absent when the provider has no hours for the place.
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
}

/// Response from the Distance Matrix API.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,

    /// One row per origin.
    #[serde(default)]
    pub rows: Vec<DistanceMatrixRow>,

    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixRow {
    /// One element per destination, in request order.
    pub elements: Vec<DistanceMatrixElement>,
}

/// Route from one origin to one destination.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixElement {
    /// `OK`, `NOT_FOUND`, `ZERO_RESULTS`, ...
    pub status: String,

    pub duration: Option<TextValue>,
}

/// A `{text, value}` pair. For durations `value` is in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: f64,

    pub text: Option<String>,
}

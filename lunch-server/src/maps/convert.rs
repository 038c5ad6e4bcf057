//! Conversion from Maps DTOs to domain types.
//!
//! Upstream bodies are validated here before anything downstream sees
//! them. Bad entries in a list are skipped; bad envelopes fail.

use chrono::Duration;
use tracing::warn;

use crate::domain::{Candidate, DomainError, Location, TravelEstimate};

use super::types::{
    DistanceMatrixResponse, GeocodeResponse, LatLng, NearbySearchResponse, PlaceResult, STATUS_OK,
};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Coordinates outside the valid range
    #[error("invalid coordinates: {0}")]
    InvalidLocation(#[from] DomainError),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Response does not line up with the request
    #[error("response shape mismatch: expected {expected} {what}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

fn to_location(latlng: LatLng) -> Result<Location, ConversionError> {
    Ok(Location::new(latlng.lat, latlng.lng)?)
}

/// Take the first geocoding match.
pub fn convert_geocode(resp: &GeocodeResponse) -> Result<Location, ConversionError> {
    let first = resp
        .results
        .first()
        .ok_or(ConversionError::MissingField("results"))?;
    to_location(first.geometry.location)
}

/// Convert nearby search results into candidates, keeping at most `limit`.
///
/// Places without a name or with unusable coordinates are skipped.
pub fn convert_places(resp: &NearbySearchResponse, limit: usize) -> Vec<Candidate> {
    resp.results
        .iter()
        .filter_map(|place| match convert_place(place) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                warn!(
                    place = place.name.as_deref().unwrap_or("<unnamed>"),
                    error = %e,
                    "skipping nearby search result"
                );
                None
            }
        })
        .take(limit)
        .collect()
}

/// Convert a single place.
pub fn convert_place(place: &PlaceResult) -> Result<Candidate, ConversionError> {
    let name = place
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(ConversionError::MissingField("name"))?;
    let geometry = place
        .geometry
        .as_ref()
        .ok_or(ConversionError::MissingField("geometry"))?;
    let location = to_location(geometry.location)?;
    let open_now = place.opening_hours.as_ref().and_then(|h| h.open_now);

    Ok(Candidate::new(name, location, open_now))
}

/// Convert a one-origin distance matrix into estimates aligned with the
/// requested destinations.
///
/// Elements whose status is not `OK`, or that carry no usable duration,
/// become unreachable estimates rather than failing the batch.
pub fn convert_distance_matrix(
    resp: &DistanceMatrixResponse,
    destinations: usize,
) -> Result<Vec<TravelEstimate>, ConversionError> {
    if resp.rows.len() != 1 {
        return Err(ConversionError::ShapeMismatch {
            what: "rows",
            expected: 1,
            actual: resp.rows.len(),
        });
    }

    let elements = &resp.rows[0].elements;
    if elements.len() != destinations {
        return Err(ConversionError::ShapeMismatch {
            what: "elements",
            expected: destinations,
            actual: elements.len(),
        });
    }

    let estimates = elements
        .iter()
        .enumerate()
        .map(|(idx, element)| {
            if element.status != STATUS_OK {
                return TravelEstimate::unreachable(idx);
            }
            let raw = element.duration.as_ref().map(|d| d.value);
            match raw.and_then(duration_from_secs) {
                Some(duration) => TravelEstimate {
                    candidate_index: idx,
                    duration: Some(duration),
                },
                None => {
                    warn!(index = idx, value = ?raw, "element OK but duration unusable");
                    TravelEstimate::unreachable(idx)
                }
            }
        })
        .collect();

    Ok(estimates)
}

/// Seconds as a duration, or `None` if negative, non-finite or too large.
fn duration_from_secs(secs: f64) -> Option<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Duration::try_seconds(secs.round() as i64)
}

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{SearchMode, TravelMode};

/// Query string of a lunch places request.
///
/// Every field is optional here so that a missing or malformed value is
/// reported by [`LunchPlacesQuery::validate`] with a specific message,
/// rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct LunchPlacesQuery {
    /// Postal code to search around (required)
    #[serde(rename = "zipCode")]
    pub zip_code: Option<String>,

    /// Travel budget in whole minutes
    pub minutes: Option<String>,

    /// `walking` or `driving`
    #[serde(rename = "travelMode")]
    pub travel_mode: Option<String>,
}

/// A validated lunch places request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunchPlacesRequest {
    pub zip_code: String,
    pub mode: SearchMode,
}

/// Why a query string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Zip code is required.")]
    MissingZipCode,

    /// One of `minutes` / `travelMode` was given without the other
    #[error("{missing} is required when {present} is provided.")]
    MissingPartner {
        missing: &'static str,
        present: &'static str,
    },

    #[error("minutes must be a whole number of minutes, got {0:?}.")]
    InvalidMinutes(String),

    #[error("travelMode must be \"walking\" or \"driving\", got {0:?}.")]
    InvalidTravelMode(String),
}

/// Blank values count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LunchPlacesQuery {
    /// Check required fields and pick the request mode.
    ///
    /// `minutes` and `travelMode` go together: both select budget mode,
    /// neither selects open-now mode, and one alone is an error.
    pub fn validate(self) -> Result<LunchPlacesRequest, QueryError> {
        let zip_code = non_blank(self.zip_code).ok_or(QueryError::MissingZipCode)?;

        let mode = match (non_blank(self.minutes), non_blank(self.travel_mode)) {
            (None, None) => SearchMode::OpenNow,
            (Some(_), None) => {
                return Err(QueryError::MissingPartner {
                    missing: "travelMode",
                    present: "minutes",
                });
            }
            (None, Some(_)) => {
                return Err(QueryError::MissingPartner {
                    missing: "minutes",
                    present: "travelMode",
                });
            }
            (Some(minutes), Some(travel_mode)) => {
                let minutes: u32 = minutes
                    .parse()
                    .map_err(|_| QueryError::InvalidMinutes(minutes.clone()))?;
                let mode: TravelMode = travel_mode
                    .parse()
                    .map_err(|_| QueryError::InvalidTravelMode(travel_mode.clone()))?;
                SearchMode::WithinBudget { mode, minutes }
            }
        };

        Ok(LunchPlacesRequest { zip_code, mode })
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// What went wrong
    pub message: String,

    /// Underlying cause, when there is one worth showing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

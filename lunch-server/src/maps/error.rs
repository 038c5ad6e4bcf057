//! Maps client error types.

use std::fmt;

/// Errors from the Maps HTTP client.
#[derive(Debug)]
pub enum MapsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization or conversion failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned a non-success HTTP status
    ApiError { status: u16, message: String },

    /// API answered 200 but reported a failure in its `status` field
    Status {
        status: String,
        message: Option<String>,
    },

    /// Geocoding found nothing for the address
    NotFound { address: String },
}

impl MapsError {
    /// The HTTP status to report downstream, if one can be attributed.
    ///
    /// A failing upstream HTTP status is passed through. Provider-level
    /// failures and malformed bodies map to 502, timeouts to 504.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            MapsError::Http(e) if e.is_timeout() => Some(504),
            MapsError::Http(e) => e.status().map(|s| s.as_u16()),
            MapsError::Json { .. } | MapsError::Status { .. } => Some(502),
            MapsError::ApiError { status, .. } => Some(*status),
            MapsError::NotFound { .. } => Some(404),
        }
    }
}

impl fmt::Display for MapsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapsError::Http(e) => write!(f, "HTTP error: {e}"),
            MapsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            MapsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            MapsError::Status { status, message } => {
                write!(f, "provider status {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            MapsError::NotFound { address } => write!(f, "no location found for {address:?}"),
        }
    }
}

impl std::error::Error for MapsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MapsError {
    /// Strips the request URL, which carries the API key.
    fn from(err: reqwest::Error) -> Self {
        MapsError::Http(err.without_url())
    }
}

//! HTTP route handlers.

use std::any::Any;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::lookup::{LookupError, PlacesProvider};

use super::dto::*;
use super::state::AppState;

/// Path of the lunch places endpoint.
pub const LUNCH_PLACES_PATH: &str = "/api/lunch-places";

/// Same endpoint under the path existing frontends already call.
pub const LEGACY_LUNCH_PLACES_PATH: &str = "/.netlify/functions/get-lunch-places";

/// Create the application router.
pub fn create_router<P: PlacesProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            LUNCH_PLACES_PATH,
            get(lunch_places::<P>).fallback(method_not_allowed),
        )
        .route(
            LEGACY_LUNCH_PLACES_PATH,
            get(lunch_places::<P>).fallback(method_not_allowed),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors())
        .with_state(state)
}

/// Any origin may call; the frontend is hosted elsewhere.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up lunch places near a postal code.
///
/// Responds with a JSON array of place names.
async fn lunch_places<P: PlacesProvider + 'static>(
    State(state): State<AppState<P>>,
    query: Result<Query<LunchPlacesQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: format!("Invalid query string: {e}"),
    })?;
    let request = query.validate()?;

    let finder = state.finder.as_ref().ok_or_else(|| AppError::Configuration {
        message: "Server configuration error: API key missing.".to_string(),
    })?;

    let selection = finder.find(&request.zip_code, request.mode).await?;

    info!(
        zip_code = %request.zip_code,
        mode = ?request.mode,
        returned = selection.len(),
        real = selection.real_count(),
        "lunch places served"
    );

    Ok(Json(selection.into_names()))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Turn a handler panic into a JSON 500.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal { details }.into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed query parameters
    BadRequest { message: String },

    /// Anything other than GET on the lookup endpoint
    MethodNotAllowed,

    /// The server was started without its API key
    Configuration { message: String },

    /// An upstream call failed
    Upstream {
        status: StatusCode,
        message: String,
        details: String,
    },

    /// Unexpected failure (a handler panicked)
    Internal { details: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        let message = match &e {
            LookupError::Geocode(_) => "Failed to geocode zip code.",
            LookupError::Search(_) => "Failed to fetch nearby restaurants.",
            LookupError::Estimation(_) => "Failed to compute travel times.",
        };
        let upstream = e.upstream();
        let status = upstream
            .upstream_status()
            .and_then(|s| StatusCode::from_u16(s).ok())
            .filter(|s| !s.is_success())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        AppError::Upstream {
            status,
            message: message.to_string(),
            details: upstream.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message,
                    details: None,
                },
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse {
                    message: "Method Not Allowed".to_string(),
                    details: None,
                },
            ),
            AppError::Configuration { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    message,
                    details: None,
                },
            ),
            AppError::Upstream {
                status,
                message,
                details,
            } => (
                status,
                ErrorResponse {
                    message,
                    details: Some(details),
                },
            ),
            AppError::Internal { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    message: "Internal server error.".to_string(),
                    details: Some(details),
                },
            ),
        };

        if status.is_server_error() {
            error!(%status, message = %body.message, details = ?body.details, "request failed");
        } else {
            warn!(%status, message = %body.message, "request rejected");
        }

        if status == StatusCode::METHOD_NOT_ALLOWED {
            return (status, [(header::ALLOW, "GET")], Json(body)).into_response();
        }
        (status, Json(body)).into_response()
    }
}

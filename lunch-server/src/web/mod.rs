//! Web layer for the lunch places server.
//!
//! Provides the HTTP endpoint that validates the query string, runs a
//! lookup and returns place names as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, LEGACY_LUNCH_PLACES_PATH, LUNCH_PLACES_PATH, create_router};
pub use state::AppState;

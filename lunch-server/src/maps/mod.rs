//! Google Maps web services client.
//!
//! This module provides an HTTP client for the three upstream services
//! behind a lunch lookup:
//! - Geocoding: postal code to coordinates
//! - Places Nearby Search: restaurants around a point (one page, max 20)
//! - Distance Matrix: travel time from one origin to many destinations
//!
//! The Maps APIs usually answer HTTP 200 and report failures in a
//! `status` field, so the client checks both.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MapsClient, MapsConfig};
pub use convert::ConversionError;
pub use error::MapsError;

//! Lunch place lookup.
//!
//! This module implements the pipeline that answers: "where can I get
//! lunch near this postal code within my travel budget?"
//!
//! A lookup geocodes the postal code, searches for restaurants within a
//! radius chosen from the travel mode and time, estimates travel times,
//! then selects a fixed number of names ranked by duration. Without a
//! travel budget it instead prefers places that are open now.

mod config;
mod finder;
mod provider;
mod radius;
mod select;

pub use config::{GENERIC_PLACES, LookupConfig};
pub use finder::{LookupError, LunchFinder};
pub use provider::PlacesProvider;
pub use radius::{radius_for, search_radius};
pub use select::{Selection, select_open_now, select_within_budget};

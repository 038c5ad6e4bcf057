//! Domain types for the lunch places lookup.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod candidate;
mod error;
mod location;
mod mode;
mod travel;

pub use candidate::Candidate;
pub use error::DomainError;
pub use location::Location;
pub use mode::{SearchMode, budget_from_minutes};
pub use travel::{TravelEstimate, TravelMode};

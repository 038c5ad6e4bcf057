//! Search radius policy.

use crate::domain::{SearchMode, TravelMode};

/// Search radius in meters for a travel mode and time budget.
///
/// | mode    | ≤10   | ≤20    | ≤30    | >30    |
/// |---------|-------|--------|--------|--------|
/// | walking | 1000  | 2000   | 3500   | 4000   |
/// | driving | 8000  | 15000  | 25000  | 25000  |
///
/// Breakpoints are inclusive: 10 minutes is in the first bucket.
pub fn radius_for(mode: TravelMode, minutes: u32) -> u32 {
    match (mode, minutes) {
        (TravelMode::Walking, 0..=10) => 1_000,
        (TravelMode::Walking, 11..=20) => 2_000,
        (TravelMode::Walking, 21..=30) => 3_500,
        (TravelMode::Walking, _) => 4_000,
        (TravelMode::Driving, 0..=10) => 8_000,
        (TravelMode::Driving, 11..=20) => 15_000,
        (TravelMode::Driving, _) => 25_000,
    }
}

/// Search radius for a request, using `fallback_m` when it has no budget.
pub fn search_radius(mode: &SearchMode, fallback_m: u32) -> u32 {
    match mode {
        SearchMode::WithinBudget { mode, minutes } => radius_for(*mode, *minutes),
        SearchMode::OpenNow => fallback_m,
    }
}

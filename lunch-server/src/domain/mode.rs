//! Request modes.

use chrono::Duration;

use super::TravelMode;

/// Which selection policy a request runs under.
///
/// The two modes are never mixed: a request either has a travel budget
/// and is ranked by duration, or it has none and prefers open places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Rank by travel time and drop anything over `minutes`.
    WithinBudget { mode: TravelMode, minutes: u32 },

    /// No travel budget; prefer places flagged open right now.
    OpenNow,
}

/// Convert a budget in whole minutes to a duration (minutes × 60 seconds).
pub fn budget_from_minutes(minutes: u32) -> Duration {
    Duration::minutes(i64::from(minutes))
}

impl SearchMode {
    /// The travel budget, if this mode has one.
    pub fn budget(&self) -> Option<Duration> {
        match self {
            SearchMode::WithinBudget { minutes, .. } => Some(budget_from_minutes(*minutes)),
            SearchMode::OpenNow => None,
        }
    }
}

//! Travel modes and per-destination travel estimates.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use super::DomainError;

/// How the diner gets to lunch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Walking,
    Driving,
}

impl TravelMode {
    /// The value the Distance Matrix API expects for `mode`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    /// Parse `walking` or `driving`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" => Ok(TravelMode::Walking),
            "driving" => Ok(TravelMode::Driving),
            _ => Err(DomainError::UnsupportedTravelMode(s.to_string())),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel duration from the origin to one candidate.
///
/// `duration` is `None` when the provider could not route to the
/// candidate. Such candidates are excluded, never treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelEstimate {
    /// Index of the candidate this estimate belongs to.
    pub candidate_index: usize,

    /// One-way travel time, if the provider could compute one.
    pub duration: Option<Duration>,
}

impl TravelEstimate {
    /// An estimate with a known duration in seconds.
    pub fn reachable(candidate_index: usize, seconds: i64) -> Self {
        Self {
            candidate_index,
            duration: Some(Duration::seconds(seconds)),
        }
    }

    /// An estimate for a candidate the provider could not route to.
    pub fn unreachable(candidate_index: usize) -> Self {
        Self {
            candidate_index,
            duration: None,
        }
    }
}

//! Restaurant candidates from nearby search.

use super::Location;

/// A restaurant returned by nearby search, not yet filtered by travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Display name as reported by the provider.
    pub name: String,

    /// Where the place is.
    pub location: Location,

    /// Whether the place is open right now.
    ///
    /// `None` when the provider sent no opening-hours data. That is not
    /// the same as closed.
    pub open_now: Option<bool>,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(name: impl Into<String>, location: Location, open_now: Option<bool>) -> Self {
        Self {
            name: name.into(),
            location,
            open_now,
        }
    }

    /// True only when the provider positively reported the place as open.
    pub fn is_open_now(&self) -> bool {
        self.open_now == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location::new(40.0, -73.0).unwrap()
    }

    #[test]
    fn open_flag() {
        assert!(Candidate::new("A", loc(), Some(true)).is_open_now());
        assert!(!Candidate::new("B", loc(), Some(false)).is_open_now());
        assert!(!Candidate::new("C", loc(), None).is_open_now());
    }

    #[test]
    fn unknown_hours_kept_distinct() {
        let c = Candidate::new("C", loc(), None);
        assert_eq!(c.open_now, None);
    }
}

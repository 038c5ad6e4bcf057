//! Geographic coordinates.

use std::fmt;

use super::DomainError;

/// A latitude/longitude pair in decimal degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// This type guarantees that by construction.
///
/// # Examples
///
/// ```
/// use lunch_server::domain::Location;
///
/// let nyc = Location::new(40.7506, -73.9972).unwrap();
/// assert_eq!(nyc.to_string(), "40.7506,-73.9972");
///
/// assert!(Location::new(90.5, 0.0).is_err());
/// assert!(Location::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Formats as `lat,lng`, the form the Maps APIs accept for coordinates.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());
        assert!(Location::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Location::new(-90.01, 0.0),
            Err(DomainError::LatitudeOutOfRange(-90.01))
        );
        assert_eq!(
            Location::new(0.0, 180.5),
            Err(DomainError::LongitudeOutOfRange(180.5))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Location::new(f64::INFINITY, 0.0).is_err());
        assert!(Location::new(0.0, f64::NEG_INFINITY).is_err());
        assert!(Location::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn display_for_query_string() {
        let loc = Location::new(51.5, -0.125).unwrap();
        assert_eq!(loc.to_string(), "51.5,-0.125");
    }
}

//! Upstream data source for lookups.

use std::future::Future;

use crate::domain::{Candidate, Location, TravelEstimate, TravelMode};
use crate::maps::{MapsClient, MapsError};

/// Provides geocoding, nearby search and travel times.
///
/// This trait allows the lookup pipeline to be tested with fake data.
/// Futures are `Send` so lookups can run inside axum handlers.
pub trait PlacesProvider: Send + Sync {
    /// Resolve a postal code to a single location.
    fn geocode(&self, address: &str) -> impl Future<Output = Result<Location, MapsError>> + Send;

    /// Restaurants within `radius_m` meters of `origin`, at most `limit`.
    fn nearby_restaurants(
        &self,
        origin: Location,
        radius_m: u32,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Candidate>, MapsError>> + Send;

    /// Travel times from `origin` to each destination, aligned by index.
    fn travel_times(
        &self,
        origin: Location,
        destinations: &[Location],
        mode: TravelMode,
    ) -> impl Future<Output = Result<Vec<TravelEstimate>, MapsError>> + Send;
}

impl PlacesProvider for MapsClient {
    async fn geocode(&self, address: &str) -> Result<Location, MapsError> {
        MapsClient::geocode(self, address).await
    }

    async fn nearby_restaurants(
        &self,
        origin: Location,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<Candidate>, MapsError> {
        MapsClient::nearby_restaurants(self, origin, radius_m, limit).await
    }

    async fn travel_times(
        &self,
        origin: Location,
        destinations: &[Location],
        mode: TravelMode,
    ) -> Result<Vec<TravelEstimate>, MapsError> {
        self.distance_matrix(origin, destinations, mode).await
    }
}

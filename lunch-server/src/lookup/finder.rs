//! The lookup pipeline: geocode, search, estimate, select.

use tracing::debug;

use crate::domain::{Location, SearchMode, budget_from_minutes};
use crate::maps::MapsError;

use super::config::LookupConfig;
use super::provider::PlacesProvider;
use super::radius::search_radius;
use super::select::{Selection, select_open_now, select_within_budget};

/// Error from a lookup, tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The postal code could not be resolved
    #[error("geocoding failed: {0}")]
    Geocode(#[source] MapsError),

    /// Nearby search failed at the HTTP level
    #[error("nearby search failed: {0}")]
    Search(#[source] MapsError),

    /// Travel times could not be computed
    #[error("travel time estimation failed: {0}")]
    Estimation(#[source] MapsError),
}

impl LookupError {
    /// The upstream error behind this failure.
    pub fn upstream(&self) -> &MapsError {
        match self {
            LookupError::Geocode(e) | LookupError::Search(e) | LookupError::Estimation(e) => e,
        }
    }
}

/// Runs lunch lookups against a provider.
///
/// Holds no per-request state, so one finder serves every request.
#[derive(Debug)]
pub struct LunchFinder<P> {
    provider: P,
    config: LookupConfig,
}

impl<P: PlacesProvider> LunchFinder<P> {
    /// Create a finder.
    pub fn new(provider: P, config: LookupConfig) -> Self {
        Self { provider, config }
    }

    /// Find lunch places near `zip_code`.
    ///
    /// Stages run in order, each awaiting the last. Any upstream failure
    /// ends the lookup; no partial list is returned.
    pub async fn find(&self, zip_code: &str, mode: SearchMode) -> Result<Selection, LookupError> {
        let origin = self
            .provider
            .geocode(zip_code)
            .await
            .map_err(LookupError::Geocode)?;

        let radius_m = search_radius(&mode, self.config.fallback_radius_m);
        let candidates = self
            .provider
            .nearby_restaurants(origin, radius_m, self.config.max_candidates)
            .await
            .map_err(LookupError::Search)?;

        debug!(
            %zip_code,
            %origin,
            radius_m,
            candidates = candidates.len(),
            "nearby search complete"
        );

        let selection = match mode {
            SearchMode::WithinBudget { mode: travel_mode, minutes } => {
                if candidates.is_empty() {
                    return Ok(Selection::empty());
                }

                let destinations: Vec<Location> = candidates.iter().map(|c| c.location).collect();
                let estimates = self
                    .provider
                    .travel_times(origin, &destinations, travel_mode)
                    .await
                    .map_err(LookupError::Estimation)?;

                let budget = budget_from_minutes(minutes);
                select_within_budget(&candidates, &estimates, budget, &self.config)
            }
            SearchMode::OpenNow => select_open_now(&candidates, &self.config),
        };

        debug!(
            returned = selection.len(),
            real = selection.real_count(),
            "selection complete"
        );

        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{Candidate, TravelEstimate, TravelMode};

    /// Calls recorded by the fake provider, in order.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Geocode(String),
        Nearby(u32, usize),
        Travel(usize, TravelMode),
    }

    /// Fake provider serving canned responses.
    struct FakeProvider {
        origin: Result<Location, u16>,
        candidates: Result<Vec<Candidate>, u16>,
        /// Seconds per candidate; `None` is unroutable.
        durations: Result<Vec<Option<i64>>, u16>,
        calls: Mutex<Vec<Call>>,
    }

    fn api_error(status: u16) -> MapsError {
        MapsError::ApiError {
            status,
            message: "boom".into(),
        }
    }

    fn origin() -> Location {
        Location::new(40.7506, -73.9972).unwrap()
    }

    impl FakeProvider {
        fn new(names: &[&str], durations: &[Option<i64>]) -> Self {
            let candidates = names
                .iter()
                .map(|n| Candidate::new(*n, origin(), None))
                .collect();
            Self {
                origin: Ok(origin()),
                candidates: Ok(candidates),
                durations: Ok(durations.to_vec()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PlacesProvider for FakeProvider {
        async fn geocode(&self, address: &str) -> Result<Location, MapsError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Geocode(address.to_string()));
            self.origin.map_err(api_error)
        }

        async fn nearby_restaurants(
            &self,
            _origin: Location,
            radius_m: u32,
            limit: usize,
        ) -> Result<Vec<Candidate>, MapsError> {
            self.calls.lock().unwrap().push(Call::Nearby(radius_m, limit));
            self.candidates.clone().map_err(api_error)
        }

        async fn travel_times(
            &self,
            _origin: Location,
            destinations: &[Location],
            mode: TravelMode,
        ) -> Result<Vec<TravelEstimate>, MapsError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Travel(destinations.len(), mode));
            let durations = self.durations.clone().map_err(api_error)?;
            Ok(durations
                .into_iter()
                .enumerate()
                .map(|(i, d)| match d {
                    Some(secs) => TravelEstimate::reachable(i, secs),
                    None => TravelEstimate::unreachable(i),
                })
                .collect())
        }
    }

    fn walking(minutes: u32) -> SearchMode {
        SearchMode::WithinBudget {
            mode: TravelMode::Walking,
            minutes,
        }
    }

    #[tokio::test]
    async fn budget_mode_ranks_and_backfills() {
        let provider = FakeProvider::new(&["Slow", "Fast", "Mid"], &[Some(590), Some(60), Some(300)]);
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let sel = finder.find("10001", walking(10)).await.unwrap();

        assert_eq!(sel.len(), 10);
        assert_eq!(&sel.names()[..3], ["Fast", "Mid", "Slow"]);
        assert_eq!(sel.names()[3], "Generic Spot 4");
        assert_eq!(
            finder.provider.calls(),
            vec![
                Call::Geocode("10001".into()),
                Call::Nearby(1_000, 20),
                Call::Travel(3, TravelMode::Walking),
            ]
        );
    }

    #[tokio::test]
    async fn nothing_within_ten_minutes_walk_is_all_placeholders() {
        let provider = FakeProvider::new(&["A", "B"], &[Some(601), None]);
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let sel = finder.find("10001", walking(10)).await.unwrap();

        assert_eq!(sel.real_count(), 0);
        assert_eq!(sel.len(), 10);
        assert!(sel.names().iter().all(|n| n.starts_with("Generic Spot ")));
    }

    #[tokio::test]
    async fn budget_mode_without_candidates_skips_estimation() {
        let provider = FakeProvider::new(&[], &[]);
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let sel = finder
            .find(
                "99501",
                SearchMode::WithinBudget {
                    mode: TravelMode::Driving,
                    minutes: 25,
                },
            )
            .await
            .unwrap();

        assert!(sel.is_empty());
        assert_eq!(
            finder.provider.calls(),
            vec![Call::Geocode("99501".into()), Call::Nearby(25_000, 20)]
        );
    }

    #[tokio::test]
    async fn open_now_mode_uses_fallback_radius_and_generic_list() {
        let provider = FakeProvider::new(&[], &[]);
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let sel = finder.find("10001", SearchMode::OpenNow).await.unwrap();

        assert_eq!(sel.names().len(), 5);
        assert_eq!(sel.names()[0], "Local Diner");
        assert_eq!(
            finder.provider.calls(),
            vec![Call::Geocode("10001".into()), Call::Nearby(10_000, 20)]
        );
    }

    #[tokio::test]
    async fn geocode_failure_stops_the_pipeline() {
        let mut provider = FakeProvider::new(&["A"], &[Some(1)]);
        provider.origin = Err(503);
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let err = finder.find("10001", walking(10)).await.unwrap_err();

        assert!(matches!(err, LookupError::Geocode(_)));
        assert_eq!(err.upstream().upstream_status(), Some(503));
        assert_eq!(finder.provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn search_failure_is_reported() {
        let mut provider = FakeProvider::new(&[], &[]);
        provider.candidates = Err(500);
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let err = finder.find("10001", SearchMode::OpenNow).await.unwrap_err();

        assert!(matches!(err, LookupError::Search(_)));
    }

    #[tokio::test]
    async fn estimation_failure_aborts_without_partial_results() {
        let mut provider = FakeProvider::new(&["A", "B"], &[]);
        provider.durations = Err(502);
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let err = finder.find("10001", walking(20)).await.unwrap_err();

        assert!(matches!(err, LookupError::Estimation(_)));
        assert_eq!(err.upstream().upstream_status(), Some(502));
    }

    #[tokio::test]
    async fn repeated_lookups_agree() {
        let provider = FakeProvider::new(
            &["A", "B", "C", "D"],
            &[Some(100), Some(100), None, Some(50)],
        );
        let finder = LunchFinder::new(provider, LookupConfig::default());

        let first = finder.find("10001", walking(30)).await.unwrap();
        let second = finder.find("10001", walking(30)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(&first.names()[..3], ["D", "A", "B"]);
    }
}

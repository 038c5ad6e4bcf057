//! Application state for the web layer.

use std::sync::Arc;

use crate::lookup::LunchFinder;
use crate::maps::MapsClient;

/// Shared application state.
///
/// `finder` is `None` when the server started without an API key; lookups
/// then fail with a configuration error before any upstream call.
pub struct AppState<P = MapsClient> {
    pub finder: Option<Arc<LunchFinder<P>>>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(finder: LunchFinder<P>) -> Self {
        Self {
            finder: Some(Arc::new(finder)),
        }
    }

    /// State for a server with no API key.
    pub fn unconfigured() -> Self {
        Self { finder: None }
    }
}

// Manual impl: cloning shares the `Arc`, so `P` need not be `Clone`.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            finder: self.finder.clone(),
        }
    }
}

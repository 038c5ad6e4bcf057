//! Lookup configuration.

/// Names returned in open-now mode when nearby search finds nothing.
pub const GENERIC_PLACES: [&str; 5] = [
    "Local Diner",
    "Corner Cafe",
    "Pizza Place",
    "Sandwich Shop",
    "Taco Stand",
];

/// Configuration parameters for a lunch lookup.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Number of names to return.
    pub target_count: usize,

    /// Most candidates read from one nearby search (one provider page).
    pub max_candidates: usize,

    /// Search radius in meters when the request has no travel budget.
    pub fallback_radius_m: u32,

    /// Prefix for backfill names; the 1-indexed position is appended.
    pub placeholder_prefix: String,

    /// Returned in open-now mode when there are no candidates at all.
    pub generic_places: Vec<String>,
}

impl LookupConfig {
    /// Create a config returning `target_count` names, other fields default.
    pub fn with_target_count(target_count: usize) -> Self {
        Self {
            target_count,
            ..Self::default()
        }
    }

    /// Backfill name for the given 1-indexed output position.
    pub fn placeholder(&self, position: usize) -> String {
        format!("{} {}", self.placeholder_prefix, position)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            target_count: 10,
            max_candidates: 20,
            fallback_radius_m: 10_000,
            placeholder_prefix: "Generic Spot".to_string(),
            generic_places: GENERIC_PLACES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LookupConfig::default();

        assert_eq!(config.target_count, 10);
        assert_eq!(config.max_candidates, 20);
        assert_eq!(config.fallback_radius_m, 10_000);
        assert_eq!(config.placeholder_prefix, "Generic Spot");
        assert_eq!(config.generic_places.len(), 5);
    }

    #[test]
    fn custom_target_count() {
        let config = LookupConfig::with_target_count(5);
        assert_eq!(config.target_count, 5);
        assert_eq!(config.max_candidates, 20);
    }

    #[test]
    fn placeholder_names() {
        let config = LookupConfig::default();
        assert_eq!(config.placeholder(1), "Generic Spot 1");
        assert_eq!(config.placeholder(10), "Generic Spot 10");
    }
}

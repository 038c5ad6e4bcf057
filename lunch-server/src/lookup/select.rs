//! Candidate selection.
//!
//! Turns candidates (and, in budget mode, their travel estimates) into the
//! fixed-size list of names returned to the caller.

use chrono::Duration;

use crate::domain::{Candidate, TravelEstimate};

use super::config::LookupConfig;

/// The names returned for one lookup, best first.
///
/// Real places come first; backfill or generic names follow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    names: Vec<String>,
    real_count: usize,
}

impl Selection {
    /// A selection with no names.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// How many leading names are real places from nearby search.
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Select by travel time.
///
/// 1. Pair each candidate with its estimate by index, dropping those with
///    no route or a duration over `budget` (the budget itself passes).
/// 2. Sort ascending by duration. The sort is stable, so ties keep their
///    input order.
/// 3. Keep the first `target_count`.
/// 4. Pad with placeholders named after their 1-indexed position.
///
/// With no candidates at all the result is empty, not padded.
pub fn select_within_budget(
    candidates: &[Candidate],
    estimates: &[TravelEstimate],
    budget: Duration,
    config: &LookupConfig,
) -> Selection {
    if candidates.is_empty() {
        return Selection::empty();
    }

    let mut durations: Vec<Option<Duration>> = vec![None; candidates.len()];
    for estimate in estimates {
        if let Some(slot) = durations.get_mut(estimate.candidate_index) {
            *slot = estimate.duration;
        }
    }

    let mut within: Vec<(usize, Duration)> = durations
        .into_iter()
        .enumerate()
        .filter_map(|(idx, d)| d.filter(|d| *d <= budget).map(|d| (idx, d)))
        .collect();
    within.sort_by_key(|&(_, d)| d);

    let mut names: Vec<String> = within
        .into_iter()
        .take(config.target_count)
        .map(|(idx, _)| candidates[idx].name.clone())
        .collect();
    let real_count = names.len();

    while names.len() < config.target_count {
        names.push(config.placeholder(names.len() + 1));
    }

    Selection { names, real_count }
}

/// Select without a travel budget.
///
/// Prefers places flagged open. If fewer than `target_count` are open,
/// falls back to all candidates so the list is not needlessly short. Input
/// order is kept either way. With no candidates at all, the configured
/// generic list is returned, cut to `target_count`.
pub fn select_open_now(candidates: &[Candidate], config: &LookupConfig) -> Selection {
    if candidates.is_empty() {
        return Selection {
            names: config
                .generic_places
                .iter()
                .take(config.target_count)
                .cloned()
                .collect(),
            real_count: 0,
        };
    }

    let open: Vec<&Candidate> = candidates.iter().filter(|c| c.is_open_now()).collect();
    let pool: Vec<&Candidate> = if open.len() >= config.target_count {
        open
    } else {
        candidates.iter().collect()
    };

    let names: Vec<String> = pool
        .into_iter()
        .take(config.target_count)
        .map(|c| c.name.clone())
        .collect();
    let real_count = names.len();

    Selection { names, real_count }
}

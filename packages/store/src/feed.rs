//! # Feed state machine
//!
//! The live feed is a polling subscription that repeatedly fetches a full
//! snapshot of the `locations` collection. The ordered query (newest first)
//! can transiently return nothing or fail, for example while the ordering
//! index is still being built, or when older documents are missing the
//! ordered field. Rather than nesting ad-hoc fallback subscriptions inside
//! callbacks, the feed is an explicit state machine:
//!
//! ```text
//! Loading ── ordered ok, non-empty ──▶ OrderedLive
//! Loading ── ordered ok, empty ──────▶ FallbackLive (unordered refetch)
//! Loading ── ordered error ──────────▶ FallbackLive
//! FallbackLive ── fallback error ────▶ Error
//! ```
//!
//! Once the feed has fallen back it stays on the unordered path for the
//! rest of the session; the degrade is best-effort, not a correctness
//! guarantee. `OrderedLive` only degrades, never re-upgrades.

use serde::{Deserialize, Serialize};

use crate::categories::CategoryFilter;
use crate::models::LocationInfo;

/// Which query the subscription is currently running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedPhase {
    /// First fetch not yet resolved.
    #[default]
    Loading,
    /// Ordered query delivering snapshots.
    OrderedLive,
    /// Unordered fallback delivering snapshots.
    FallbackLive,
    /// Both paths failed; the view shows an error state.
    Error,
}

/// Result of one poll cycle, as seen by the state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Ok(Vec<LocationInfo>),
    Err(String),
}

/// Current feed state: phase plus the last delivered snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedSnapshot {
    pub phase: FeedPhase,
    pub locations: Vec<LocationInfo>,
    pub error: Option<String>,
}

impl FeedSnapshot {
    /// Whether the next poll should use the ordered query.
    pub fn wants_ordered(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading | FeedPhase::OrderedLive)
    }

    /// Apply the outcome of an **ordered** fetch.
    ///
    /// Returns `true` when the caller must immediately re-fetch unordered
    /// (the empty-result or error fallback just fired).
    pub fn apply_ordered(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Ok(locations) if locations.is_empty() => {
                // Might just be an empty collection, but it might also be
                // an index still building; degrade and let the unordered
                // query decide.
                self.phase = FeedPhase::FallbackLive;
                true
            }
            FetchOutcome::Ok(locations) => {
                self.phase = FeedPhase::OrderedLive;
                self.locations = locations;
                self.error = None;
                false
            }
            FetchOutcome::Err(_) => {
                self.phase = FeedPhase::FallbackLive;
                true
            }
        }
    }

    /// Apply the outcome of an **unordered** fallback fetch.
    pub fn apply_fallback(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Ok(locations) => {
                self.phase = FeedPhase::FallbackLive;
                self.locations = locations;
                self.error = None;
            }
            FetchOutcome::Err(message) => {
                self.phase = FeedPhase::Error;
                self.error = Some(message);
            }
        }
    }
}

/// Narrow an already-fetched list to a category. Pure and synchronous;
/// recomputed on every render, no server-side query parameter.
pub fn filter_by_category(locations: &[LocationInfo], filter: &CategoryFilter) -> Vec<LocationInfo> {
    locations
        .iter()
        .filter(|l| filter.matches(&l.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: &str, category: &str, created_at: i64) -> LocationInfo {
        LocationInfo {
            id: id.into(),
            name: format!("spot {id}"),
            category: category.into(),
            custom_category: None,
            details: None,
            image_url: "https://img".into(),
            lat: 23.8,
            lng: 90.4,
            created_at,
            user_id: "u".into(),
            user_name: "Samir".into(),
            verified_count: 0,
            fake_count: 0,
        }
    }

    #[test]
    fn ordered_success_goes_live() {
        let mut feed = FeedSnapshot::default();
        assert_eq!(feed.phase, FeedPhase::Loading);
        assert!(feed.wants_ordered());

        let refetch = feed.apply_ordered(FetchOutcome::Ok(vec![loc("a", "tran", 2), loc("b", "tran", 1)]));
        assert!(!refetch);
        assert_eq!(feed.phase, FeedPhase::OrderedLive);
        assert_eq!(feed.locations.len(), 2);
    }

    #[test]
    fn empty_ordered_result_falls_back_to_unordered_set() {
        let mut feed = FeedSnapshot::default();
        let refetch = feed.apply_ordered(FetchOutcome::Ok(vec![]));
        assert!(refetch);
        assert_eq!(feed.phase, FeedPhase::FallbackLive);

        // The emitted list equals the fallback document set, not an empty list.
        feed.apply_fallback(FetchOutcome::Ok(vec![loc("a", "tran", 0)]));
        assert_eq!(feed.locations.len(), 1);
        assert_eq!(feed.phase, FeedPhase::FallbackLive);
        assert!(!feed.wants_ordered());
    }

    #[test]
    fn ordered_error_falls_back() {
        let mut feed = FeedSnapshot::default();
        let refetch = feed.apply_ordered(FetchOutcome::Err("index building".into()));
        assert!(refetch);
        assert_eq!(feed.phase, FeedPhase::FallbackLive);
        assert!(feed.error.is_none());
    }

    #[test]
    fn fallback_never_retries_ordered_within_session() {
        let mut feed = FeedSnapshot::default();
        feed.apply_ordered(FetchOutcome::Err("boom".into()));
        feed.apply_fallback(FetchOutcome::Ok(vec![loc("a", "tran", 0)]));
        // Later polls stay unordered even though data now exists.
        assert!(!feed.wants_ordered());
        feed.apply_fallback(FetchOutcome::Ok(vec![loc("a", "tran", 0), loc("b", "tran", 1)]));
        assert_eq!(feed.phase, FeedPhase::FallbackLive);
        assert_eq!(feed.locations.len(), 2);
    }

    #[test]
    fn fallback_error_reaches_error_state() {
        let mut feed = FeedSnapshot::default();
        feed.apply_ordered(FetchOutcome::Err("boom".into()));
        feed.apply_fallback(FetchOutcome::Err("still down".into()));
        assert_eq!(feed.phase, FeedPhase::Error);
        assert_eq!(feed.error.as_deref(), Some("still down"));
    }

    #[test]
    fn category_filter_narrows_in_memory_list() {
        let all = vec![loc("a", "tran", 0), loc("b", "jilapi", 1), loc("c", "tran", 2)];
        let tran = filter_by_category(&all, &CategoryFilter::Only("tran".into()));
        assert_eq!(tran.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(), ["a", "c"]);

        let everything = filter_by_category(&all, &CategoryFilter::All);
        assert_eq!(everything.len(), 3);
    }
}

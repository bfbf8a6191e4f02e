//! Per-publisher latest-value cache with time-based expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Most recent observation from one publisher.
#[derive(Debug, Clone, Copy)]
pub struct LastSeen {
    pub temperature: f64,
    pub observed_at: Instant,
}

/// Bounded-recency view of per-publisher readings.
///
/// Holds at most one entry per publisher id: a newer reading overwrites,
/// never appends. Expiry is reactive: [`purge`](Self::purge) runs after each
/// update, on the updater's clock, and there is no background timer. A
/// publisher that goes silent therefore keeps contributing to the average
/// until the next message (from any publisher) triggers a purge that removes
/// it. That lag is part of the observable behavior, not a defect.
#[derive(Debug)]
pub struct AggregationStore {
    entries: HashMap<u32, LastSeen>,
    retention_window: Duration,
}

impl AggregationStore {
    pub fn new(retention_window: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            retention_window,
        }
    }

    /// Insert or overwrite the entry for `publisher_id`. Always succeeds;
    /// the temperature is not validated.
    pub fn update(&mut self, publisher_id: u32, temperature: f64, now: Instant) {
        self.entries.insert(
            publisher_id,
            LastSeen {
                temperature,
                observed_at: now,
            },
        );
    }

    /// Remove every entry older than the retention window. Strict
    /// inequality: an entry exactly at the boundary is retained.
    pub fn purge(&mut self, now: Instant) {
        let window = self.retention_window;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.observed_at) <= window);
    }

    /// Unweighted arithmetic mean of the retained temperatures, or `None`
    /// when the store is empty (distinct from zero).
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.values().map(|entry| entry.temperature).sum();
        Some(sum / self.entries.len() as f64)
    }

    pub fn get(&self, publisher_id: u32) -> Option<&LastSeen> {
        self.entries.get(&publisher_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn retention_window(&self) -> Duration {
        self.retention_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WINDOW: Duration = Duration::from_secs(600);

    #[test]
    fn update_overwrites_same_publisher() {
        let mut store = AggregationStore::new(WINDOW);
        let t0 = Instant::now();
        store.update(1, 20.0, t0);
        store.update(1, 30.0, t0 + Duration::from_secs(1));
        assert_eq!(store.len(), 1);
        assert_relative_eq!(store.average().unwrap(), 30.0);
    }

    #[test]
    fn average_spans_publishers() {
        let mut store = AggregationStore::new(WINDOW);
        let t = Instant::now();
        store.update(1, 20.0, t);
        store.update(2, 30.0, t);
        store.purge(t);
        assert_relative_eq!(store.average().unwrap(), 25.0);
    }

    #[test]
    fn empty_store_has_no_average() {
        let store = AggregationStore::new(WINDOW);
        assert_eq!(store.average(), None);
    }

    #[test]
    fn purge_boundary_is_inclusive() {
        let mut store = AggregationStore::new(WINDOW);
        let t0 = Instant::now();
        store.update(1, 22.0, t0);

        // exactly at the window: retained
        store.purge(t0 + WINDOW);
        assert_eq!(store.len(), 1);

        // one second past: removed
        store.purge(t0 + WINDOW + Duration::from_secs(1));
        assert!(store.is_empty());
        assert_eq!(store.average(), None);
    }

    #[test]
    fn purge_removes_only_stale_entries() {
        let mut store = AggregationStore::new(WINDOW);
        let t0 = Instant::now();
        store.update(1, 20.0, t0);
        let t1 = t0 + WINDOW + Duration::from_secs(5);
        store.update(2, 30.0, t1);
        store.purge(t1);
        assert_eq!(store.len(), 1);
        assert_relative_eq!(store.average().unwrap(), 30.0);
        assert!(store.get(1).is_none());
        assert!(store.get(2).is_some());
    }

    #[test]
    fn fresh_update_revives_a_purged_publisher() {
        let mut store = AggregationStore::new(WINDOW);
        let t0 = Instant::now();
        store.update(1, 20.0, t0);
        let later = t0 + WINDOW + Duration::from_secs(60);
        store.purge(later);
        assert!(store.is_empty());
        store.update(1, 26.0, later);
        store.purge(later);
        assert_relative_eq!(store.average().unwrap(), 26.0);
    }
}

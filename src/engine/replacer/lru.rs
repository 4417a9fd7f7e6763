//! LRU (Least Recently Used) replacement policy.

use std::collections::{BTreeMap, HashMap};

use crate::common::PageId;
use crate::engine::replacer::Replacer;

/// Evicts the page whose last use lies furthest in the past.
///
/// Recency is a logical clock bumped on every hit and insert. The
/// `BTreeMap` keyed by stamp keeps the resident set in recency order, so
/// eviction is `pop_first` and a hit is one remove plus one insert.
#[derive(Debug)]
pub struct LruReplacer {
    /// Last-use stamp per resident page.
    last_use: HashMap<PageId, u64>,

    /// Resident pages ordered by last use (first = least recent).
    recency: BTreeMap<u64, PageId>,

    /// Logical clock, strictly increasing.
    clock: u64,

    capacity: usize,
}

impl LruReplacer {
    /// Create an empty LRU replacer holding at most `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            last_use: HashMap::new(),
            recency: BTreeMap::new(),
            clock: 0,
            capacity,
        }
    }

    /// Make `page` the most recently used.
    fn touch(&mut self, page: PageId) {
        self.clock += 1;
        if let Some(old) = self.last_use.insert(page, self.clock) {
            self.recency.remove(&old);
        }
        self.recency.insert(self.clock, page);
    }
}

impl Replacer for LruReplacer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.last_use.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.last_use.contains_key(&page)
    }

    fn record_hit(&mut self, page: PageId, _position: usize) {
        if self.contains(page) {
            self.touch(page);
        }
    }

    fn insert(&mut self, page: PageId, _position: usize) {
        debug_assert!(
            self.contains(page) || !self.is_full(),
            "insert into a full LRU set"
        );
        self.touch(page);
    }

    fn evict(&mut self) -> Option<PageId> {
        let (_, victim) = self.recency.pop_first()?;
        self.last_use.remove(&victim);
        Some(victim)
    }

    fn resident_pages(&self) -> Vec<PageId> {
        self.recency.values().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u64) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new(3);

        replacer.insert(pid(0), 0);
        replacer.insert(pid(1), 1);
        replacer.insert(pid(2), 2);

        assert_eq!(replacer.evict(), Some(pid(0)));
        assert_eq!(replacer.evict(), Some(pid(1)));
        assert_eq!(replacer.evict(), Some(pid(2)));
        assert_eq!(replacer.evict(), None);
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut replacer = LruReplacer::new(3);

        replacer.insert(pid(0), 0);
        replacer.insert(pid(1), 1);
        replacer.insert(pid(2), 2);
        replacer.record_hit(pid(0), 3);

        assert_eq!(replacer.resident_pages(), vec![pid(1), pid(2), pid(0)]);
        assert_eq!(replacer.evict(), Some(pid(1)));
    }

    #[test]
    fn test_lru_hit_on_missing_page_is_ignored() {
        let mut replacer = LruReplacer::new(2);

        replacer.insert(pid(0), 0);
        replacer.record_hit(pid(9), 1);

        assert_eq!(replacer.len(), 1);
        assert!(!replacer.contains(pid(9)));
    }

    #[test]
    fn test_lru_maps_stay_in_sync() {
        let mut replacer = LruReplacer::new(2);

        for (pos, id) in [0, 1, 0, 1, 0].into_iter().enumerate() {
            if replacer.contains(pid(id)) {
                replacer.record_hit(pid(id), pos);
            } else {
                replacer.insert(pid(id), pos);
            }
        }

        assert_eq!(replacer.last_use.len(), replacer.recency.len());
        assert_eq!(replacer.resident_pages(), vec![pid(1), pid(0)]);
    }
}

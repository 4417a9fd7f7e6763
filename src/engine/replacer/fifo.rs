//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;
use crate::engine::replacer::Replacer;

/// Evicts pages in the order they were loaded.
///
/// Hits never reorder the queue, which is what exposes FIFO to
/// Belady's anomaly.
#[derive(Debug)]
pub struct FifoReplacer {
    /// Pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    capacity: usize,
}

impl FifoReplacer {
    /// Create an empty FIFO replacer holding at most `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            resident: HashSet::new(),
            capacity,
        }
    }
}

impl Replacer for FifoReplacer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn record_hit(&mut self, _page: PageId, _position: usize) {}

    fn insert(&mut self, page: PageId, _position: usize) {
        debug_assert!(!self.is_full(), "insert into a full FIFO set");
        if self.resident.insert(page) {
            self.queue.push_back(page);
        }
    }

    fn evict(&mut self) -> Option<PageId> {
        let victim = self.queue.pop_front()?;
        self.resident.remove(&victim);
        Some(victim)
    }

    fn resident_pages(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }
}

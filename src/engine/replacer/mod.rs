//! Eviction policy implementations (replacers).
//!
//! Every policy owns a bounded resident set and decides which page leaves
//! when a fault arrives at capacity:
//! - [`LruReplacer`] - Least Recently Used
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`OptimalReplacer`] - Belady's clairvoyant policy
//!
//! The simulation loop in [`crate::engine::Simulation`] drives them
//! through the [`Replacer`] trait and never looks inside.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::PageId;

/// A bounded resident set plus the policy that orders it.
///
/// `position` arguments are indices into the reference string being
/// simulated. Only [`OptimalReplacer`] needs them, but passing them
/// uniformly keeps the simulation loop policy-agnostic.
pub trait Replacer {
    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of currently resident pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once another insert would need an eviction first.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Check whether `page` is resident.
    fn contains(&self, page: PageId) -> bool;

    /// Record a hit on a resident page at `position`.
    fn record_hit(&mut self, page: PageId, position: usize);

    /// Load a non-resident page referenced at `position`.
    ///
    /// Callers must evict first when the set is full.
    fn insert(&mut self, page: PageId, position: usize);

    /// Remove and return the policy's victim, or None if nothing is resident.
    fn evict(&mut self) -> Option<PageId>;

    /// Resident pages in the policy's own order (eviction candidates first
    /// for LRU and FIFO, insertion order for Optimal).
    fn resident_pages(&self) -> Vec<PageId>;
}

//! Optimal (Belady / MIN) replacement policy.
//!
//! Evicts the resident page whose next use lies furthest in the future.
//! A resident that is never used again is always preferred, and among
//! several such pages the one loaded earliest goes first. That tie-break
//! is not part of the algorithm proper, but fault counts depend on it
//! being stable.
//!
//! # Lookahead
//! A naive victim search scans the remaining reference string on every
//! fault, which is quadratic. Instead the replacer precomputes, for every
//! position, the index of the next access to the same page. Each resident
//! carries the next-use index of its latest access; since no resident is
//! touched between that access and the current fault, the stored value is
//! exactly its next use from the fault onwards.

use std::collections::{HashMap, HashSet};

use crate::common::PageId;
use crate::engine::replacer::Replacer;

#[derive(Debug, Clone, Copy)]
struct Resident {
    page: PageId,
    /// Position of the next access, None if the page never comes back.
    next_use: Option<usize>,
}

/// Clairvoyant replacer built from the full reference string.
#[derive(Debug)]
pub struct OptimalReplacer {
    /// `next_occurrence[i]` is the next position after `i` naming the same page.
    next_occurrence: Vec<Option<usize>>,

    /// Residents in insertion order.
    residents: Vec<Resident>,

    /// Set for O(1) membership check.
    members: HashSet<PageId>,

    capacity: usize,
}

impl OptimalReplacer {
    /// Create an empty replacer that will be driven over `reference`.
    pub fn new(capacity: usize, reference: &[PageId]) -> Self {
        Self {
            next_occurrence: next_occurrences(reference),
            residents: Vec::new(),
            members: HashSet::new(),
            capacity,
        }
    }

    fn next_use_after(&self, position: usize) -> Option<usize> {
        self.next_occurrence.get(position).copied().flatten()
    }

    fn victim_index(&self) -> Option<usize> {
        self.residents
            .iter()
            .position(|r| r.next_use.is_none())
            .or_else(|| {
                self.residents
                    .iter()
                    .enumerate()
                    .max_by_key(|(_, r)| r.next_use)
                    .map(|(idx, _)| idx)
            })
    }
}

/// Build the next-occurrence table with one backwards pass.
fn next_occurrences(reference: &[PageId]) -> Vec<Option<usize>> {
    let mut next = vec![None; reference.len()];
    let mut seen: HashMap<PageId, usize> = HashMap::new();

    for (position, &page) in reference.iter().enumerate().rev() {
        next[position] = seen.insert(page, position);
    }
    next
}

impl Replacer for OptimalReplacer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.residents.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.members.contains(&page)
    }

    fn record_hit(&mut self, page: PageId, position: usize) {
        let next_use = self.next_use_after(position);
        if let Some(resident) = self.residents.iter_mut().find(|r| r.page == page) {
            resident.next_use = next_use;
        }
    }

    fn insert(&mut self, page: PageId, position: usize) {
        if !self.members.insert(page) {
            self.record_hit(page, position);
            return;
        }
        debug_assert!(self.residents.len() < self.capacity, "insert into a full Optimal set");
        let next_use = self.next_use_after(position);
        self.residents.push(Resident { page, next_use });
    }

    fn evict(&mut self) -> Option<PageId> {
        let idx = self.victim_index()?;
        let victim = self.residents.remove(idx).page;
        self.members.remove(&victim);
        Some(victim)
    }

    fn resident_pages(&self) -> Vec<PageId> {
        self.residents.iter().map(|r| r.page).collect()
    }
}

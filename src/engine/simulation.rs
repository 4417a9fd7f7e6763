//! The fault-counting loop shared by every policy.
//!
//! ```text
//! for each page in the reference string:
//!     resident?  ──yes──▶ hit   (policy refreshes its order)
//!        │no
//!        ▼
//!     fault ──▶ full? ──yes──▶ evict policy victim
//!                  │              │
//!                  └──────┬───────┘
//!                         ▼
//!                   insert page
//! ```

use crate::common::PageId;
use crate::engine::{Algorithm, SimulationStats};

/// What happened on one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded, possibly displacing `evicted`.
    Fault { evicted: Option<PageId> },
}

impl Access {
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }
}

/// One traced access: the outcome and the resident set right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub position: usize,
    pub page: PageId,
    pub outcome: Access,
    /// Resident pages in the policy's order after this access.
    pub resident: Vec<PageId>,
}

/// Outcome of one full pass over a reference string.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub algorithm: Algorithm,
    pub capacity: usize,
    pub stats: SimulationStats,
    /// Resident pages left behind, in the policy's order.
    pub resident: Vec<PageId>,
    /// Per-access trace, present only when requested.
    pub trace: Option<Vec<Step>>,
}

impl SimulationReport {
    /// Total page faults.
    pub fn faults(&self) -> usize {
        self.stats.faults as usize
    }
}

/// A configured simulation run.
///
/// # Example
/// ```
/// use pagesim::{Algorithm, ReferenceString, Simulation};
///
/// let refs: ReferenceString = "1 2 3 4 1 2 5 1 2 3 4 5".parse().unwrap();
/// let report = Simulation::new(Algorithm::Fifo, 3).run(refs.as_slice());
/// assert_eq!(report.faults(), 9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    algorithm: Algorithm,
    capacity: usize,
    trace: bool,
}

impl Simulation {
    /// Create a run of `algorithm` over `capacity` frames.
    pub fn new(algorithm: Algorithm, capacity: usize) -> Self {
        Self {
            algorithm,
            capacity,
            trace: false,
        }
    }

    /// Record a [`Step`] for every access.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replay `reference` and report faults.
    ///
    /// With zero frames nothing can become resident, so every access faults
    /// and nothing is ever evicted.
    pub fn run(&self, reference: &[PageId]) -> SimulationReport {
        let mut replacer = self.algorithm.replacer(self.capacity, reference);
        let mut stats = SimulationStats::new();
        let mut trace = self.trace.then(|| Vec::with_capacity(reference.len()));

        for (position, &page) in reference.iter().enumerate() {
            let outcome = if replacer.contains(page) {
                replacer.record_hit(page, position);
                stats.hits += 1;
                Access::Hit
            } else {
                stats.faults += 1;
                let mut evicted = None;
                if self.capacity > 0 {
                    if replacer.is_full() {
                        evicted = replacer.evict();
                        stats.evictions += 1;
                    }
                    replacer.insert(page, position);
                }
                Access::Fault { evicted }
            };

            debug_assert!(replacer.len() <= self.capacity);

            if let Some(steps) = trace.as_mut() {
                steps.push(Step {
                    position,
                    page,
                    outcome,
                    resident: replacer.resident_pages(),
                });
            }
        }

        SimulationReport {
            algorithm: self.algorithm,
            capacity: self.capacity,
            stats,
            resident: replacer.resident_pages(),
            trace,
        }
    }
}

/// Count the page faults `algorithm` incurs on `reference` with `capacity` frames.
///
/// Always between 0 and `reference.len()`.
pub fn simulate(algorithm: Algorithm, capacity: usize, reference: &[PageId]) -> usize {
    Simulation::new(algorithm, capacity).run(reference).faults()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_empty_reference_has_no_faults() {
        for algorithm in Algorithm::ALL {
            let report = Simulation::new(algorithm, 3).run(&[]);
            assert_eq!(report.faults(), 0);
            assert!(report.resident.is_empty());
        }
    }

    #[test]
    fn test_zero_capacity_faults_every_access() {
        let refs = pages(&[1, 1, 2, 1]);
        for algorithm in Algorithm::ALL {
            let report = Simulation::new(algorithm, 0).run(&refs);
            assert_eq!(report.faults(), 4);
            assert_eq!(report.stats.evictions, 0);
            assert!(report.resident.is_empty());
        }
    }

    #[test]
    fn test_trace_records_every_access() {
        let refs = pages(&[1, 2, 1, 3]);
        let report = Simulation::new(Algorithm::Lru, 2).with_trace(true).run(&refs);
        let trace = report.trace.expect("trace requested");

        assert_eq!(trace.len(), refs.len());
        assert_eq!(trace[0].outcome, Access::Fault { evicted: None });
        assert_eq!(trace[2].outcome, Access::Hit);
        assert_eq!(
            trace[3].outcome,
            Access::Fault {
                evicted: Some(PageId::new(2))
            }
        );
        assert_eq!(trace[3].resident, pages(&[1, 3]));
        assert_eq!(
            trace.iter().filter(|s| s.outcome.is_fault()).count(),
            report.stats.faults as usize
        );
    }

    #[test]
    fn test_trace_off_by_default() {
        let report = Simulation::new(Algorithm::Fifo, 2).run(&pages(&[1, 2]));
        assert!(report.trace.is_none());
    }

    #[test]
    fn test_stats_account_for_every_access() {
        let refs = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        for algorithm in Algorithm::ALL {
            let report = Simulation::new(algorithm, 3).run(&refs);
            assert_eq!(report.stats.accesses(), refs.len() as u64);
            // Three frames fill on the first three faults
            assert_eq!(report.stats.evictions, report.stats.faults - 3);
            assert_eq!(report.resident.len(), 3);
        }
    }

    #[test]
    fn test_simulate_matches_report() {
        let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        for algorithm in Algorithm::ALL {
            assert_eq!(
                simulate(algorithm, 3, &refs),
                Simulation::new(algorithm, 3).run(&refs).faults()
            );
        }
    }
}

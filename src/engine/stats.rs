//! Simulation statistics.

use std::fmt;

/// Counters collected over one simulation run.
///
/// Every access is exactly one of a hit or a fault, so
/// `hits + faults == accesses()`.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let stats = SimulationStats { hits: 3, faults: 1, evictions: 0 };
/// assert_eq!(stats.accesses(), 4);
/// assert_eq!(stats.hit_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Accesses that found the page resident.
    pub hits: u64,

    /// Accesses that had to load the page.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total accesses processed.
    pub fn accesses(&self) -> u64 {
        self.hits + self.faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

//! Algorithm selector.

use std::fmt;
use std::str::FromStr;

use crate::common::config::ALGORITHM_NAMES;
use crate::common::{Error, PageId};
use crate::engine::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};

/// The page-replacement policies the engine can simulate.
///
/// Names parse case-sensitively: `"LRU"`, `"FIFO"` and `"Optimal"`.
///
/// # Example
/// ```
/// use pagesim::Algorithm;
///
/// let algorithm: Algorithm = "Optimal".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Optimal);
/// assert!("optimal".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Lru,
    Fifo,
    Optimal,
}

impl Algorithm {
    /// Every algorithm, in the order results are presented.
    pub const ALL: [Algorithm; 3] = [Algorithm::Lru, Algorithm::Fifo, Algorithm::Optimal];

    /// Display name, also the accepted input spelling.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Lru => ALGORITHM_NAMES[0],
            Algorithm::Fifo => ALGORITHM_NAMES[1],
            Algorithm::Optimal => ALGORITHM_NAMES[2],
        }
    }

    /// Build an empty resident set for one run over `reference`.
    pub fn replacer(self, capacity: usize, reference: &[PageId]) -> Box<dyn Replacer> {
        match self {
            Algorithm::Lru => Box::new(LruReplacer::new(capacity)),
            Algorithm::Fifo => Box::new(FifoReplacer::new(capacity)),
            Algorithm::Optimal => Box::new(OptimalReplacer::new(capacity, reference)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::InvalidAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

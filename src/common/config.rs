//! Configuration constants for pagesim.

/// Frame count used by the command line when `--frames` is omitted.
///
/// Three frames is the textbook setting for the classic
/// `1 2 3 4 1 2 5 1 2 3 4 5` reference string.
pub const DEFAULT_FRAME_CAPACITY: usize = 3;

/// Algorithm names accepted by the adapter, matched case-sensitively.
pub const ALGORITHM_NAMES: [&str; 3] = ["LRU", "FIFO", "Optimal"];

/// Largest capacity visited by a sweep unless the caller asks otherwise.
pub const DEFAULT_SWEEP_MAX_FRAMES: usize = 8;

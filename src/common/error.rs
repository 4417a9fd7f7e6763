//! Error types for pagesim.
//!
//! The simulation engine itself cannot fail on well-typed input. Every
//! variant here is raised while turning user text into engine input.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The `Display` text of each variant is the message shown to the user,
/// so it is part of the public contract.
#[derive(Debug, Error)]
pub enum Error {
    /// Reference string is empty or holds a token that is not a
    /// non-negative integer.
    #[error("Invalid reference string. Please enter a valid space-separated string.")]
    InvalidReferenceString,

    /// Algorithm name outside `LRU`, `FIFO` and `Optimal`.
    #[error("Invalid algorithm selected.")]
    InvalidAlgorithm(String),

    /// Frame count that does not parse as a non-negative integer.
    #[error("Invalid page frame count. Please enter a non-negative integer.")]
    InvalidFrameCount(String),

    /// I/O error while reading a reference string from a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

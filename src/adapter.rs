//! Text adapter between a front-end and the engine.
//!
//! A front-end collects three strings (reference string, frame count,
//! algorithm name) and shows one string back. Everything here validates
//! before the engine runs; the engine never sees malformed input.

use std::fs;
use std::path::Path;

use crate::common::{Error, ReferenceString, Result};
use crate::engine::{simulate, Algorithm};

/// Parse whitespace-separated page numbers.
///
/// # Errors
/// `Error::InvalidReferenceString` on blank input or a non-integer token.
pub fn parse_reference_string(text: &str) -> Result<ReferenceString> {
    text.parse()
}

/// Parse a frame count.
///
/// Surrounding whitespace is ignored. Zero is accepted: every access
/// then faults.
///
/// # Errors
/// `Error::InvalidFrameCount` if the text is not a non-negative integer.
pub fn parse_frame_count(text: &str) -> Result<usize> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidFrameCount(text.to_string()))
}

/// Match an algorithm name exactly.
///
/// # Errors
/// `Error::InvalidAlgorithm` for anything but `LRU`, `FIFO` or `Optimal`.
pub fn parse_algorithm(text: &str) -> Result<Algorithm> {
    text.parse()
}

/// Read a reference string from a text file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidReferenceString` if its contents do not parse
pub fn read_reference_file(path: impl AsRef<Path>) -> Result<ReferenceString> {
    let text = fs::read_to_string(path)?;
    parse_reference_string(&text)
}

/// Format a result line: `"<Algorithm> Page Faults: <N>"`.
pub fn format_result(algorithm: Algorithm, faults: usize) -> String {
    format!("{} Page Faults: {}", algorithm, faults)
}

/// Validate the three form inputs, run the engine, and format the result.
///
/// Inputs are checked in the order the form presents them to the user
/// on submit: frame count, reference string, algorithm.
///
/// # Example
/// ```
/// use pagesim::adapter::simulate_form;
///
/// let line = simulate_form("1 2 3 4 1 2 5 1 2 3 4 5", "3", "FIFO").unwrap();
/// assert_eq!(line, "FIFO Page Faults: 9");
///
/// let err = simulate_form("1 2 x", "3", "FIFO").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Invalid reference string. Please enter a valid space-separated string."
/// );
/// ```
pub fn simulate_form(reference_text: &str, frames_text: &str, algorithm_text: &str) -> Result<String> {
    let capacity = parse_frame_count(frames_text)?;
    let reference = parse_reference_string(reference_text)?;
    let algorithm = parse_algorithm(algorithm_text)?;

    let faults = simulate(algorithm, capacity, reference.as_slice());
    Ok(format_result(algorithm, faults))
}

//! Page-replacement simulation engine.
//!
//! One call replays a reference string against a fixed number of frames
//! and counts page faults. Runs share nothing: each allocates its own
//! resident set and counters and drops them when it returns.
//!
//! # Components
//! - [`Algorithm`] - Selector for the eviction policy
//! - [`Simulation`] / [`simulate`] - The fault-counting loop
//! - [`SimulationStats`] - Hit/fault/eviction counters
//! - [`analysis`] - Cross-algorithm and cross-capacity comparisons
//! - [`replacer`] - Eviction policy implementations

mod algorithm;
pub mod analysis;
pub mod replacer;
mod simulation;
mod stats;

pub use algorithm::Algorithm;
pub use analysis::{belady_anomalies, compare, sweep, SweepPoint};
pub use simulation::{simulate, Access, Simulation, SimulationReport, Step};
pub use stats::SimulationStats;

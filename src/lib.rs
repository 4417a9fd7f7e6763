//! pagesim - a page-replacement simulator.
//!
//! Replays a reference string (an ordered list of page numbers) against a
//! fixed number of page frames and counts page faults under one of three
//! eviction policies: LRU, FIFO and Optimal.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │         Front-end (src/main.rs, command line)            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓ text                             │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Adapter (adapter.rs)  validate + format           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓ typed input                      │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Engine (engine/)                          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │    Replacers: LRU | FIFO | Optimal              │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulation + SimulationStats + analysis             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, ReferenceString, Error, config)
//! - [`engine`] - Simulation loop, statistics and eviction policies
//! - [`adapter`] - Text validation and result formatting
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, Algorithm, ReferenceString};
//!
//! let refs: ReferenceString = "1 2 3 4 1 2 5 1 2 3 4 5".parse().unwrap();
//! assert_eq!(simulate(Algorithm::Lru, 3, refs.as_slice()), 10);
//! assert_eq!(simulate(Algorithm::Optimal, 4, refs.as_slice()), 6);
//! ```

pub mod adapter;
pub mod common;
pub mod engine;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, ReferenceString, Result};
pub use engine::{
    simulate, Access, Algorithm, Simulation, SimulationReport, SimulationStats, Step, SweepPoint,
};

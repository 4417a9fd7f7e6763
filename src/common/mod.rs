//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers ([`PageId`]) and the [`ReferenceString`] they form

pub mod config;
pub mod error;
mod page_id;
mod reference_string;

pub use error::{Error, Result};
pub use page_id::PageId;
pub use reference_string::ReferenceString;

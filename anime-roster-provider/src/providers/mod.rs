//! Character source implementations

/// Shared utilities used by source implementations.
pub mod common;

mod jikan;

pub use jikan::JikanProvider;

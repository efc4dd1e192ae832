//! lank — manage local module checkouts from a per-project rc file (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod output;

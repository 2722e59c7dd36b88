//! Shared tracing/logging setup for solemart processes.

pub mod tracing;

pub use tracing::{init, init_with};

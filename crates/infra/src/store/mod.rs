//! Persistent-store boundary.
//!
//! This module defines the infrastructure-facing abstraction the catalog
//! services query and mutate through, without making storage assumptions.
//! Reads materialize products with their image resolved; mutations follow a
//! stage-and-commit cycle that reports the affected-row count.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use r#trait::{Committed, FetchMode, ProductStore, StoreError};

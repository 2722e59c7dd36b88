//! Infrastructure layer: the persistent-store boundary and the catalog
//! services composed on top of it.

pub mod service;
pub mod store;


pub use service::{CatalogQuery, MutationGateway};
pub use store::{
    Committed, FetchMode, InMemoryProductStore, PostgresProductStore, ProductStore, StoreError,
};

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use solemart_catalog::{Product, ProductDraft};
use solemart_core::ProductId;

/// Store-level fault. These are the only errors the read/mutation surface
/// ever raises; empty results are not errors, and domain validation happens
/// upstream of the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not reach the backing store.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// A read or decode against the store failed.
    #[error("store query failed: {0}")]
    Query(String),

    /// A stage-and-commit cycle failed.
    #[error("store commit failed: {0}")]
    Commit(String),
}

/// How the caller intends to use a point lookup.
///
/// This replaces the tracked / no-tracking method pair of ORM-style
/// repositories with one explicit flag: `ForUpdate` signals that the caller
/// will mutate the returned product and save it back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    ReadOnly,
    ForUpdate,
}

/// Receipt for a committed insert: the store-assigned identity and the
/// affected-row count of the commit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Committed {
    pub id: ProductId,
    pub rows_affected: u64,
}

/// Queryable product collection with stage-and-commit mutations.
///
/// Every product a store hands out has its image resolved. Natural order is
/// insertion (identity) order. Each method is one round-trip: there is no
/// cross-call transaction state.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every product, in natural order.
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Point lookup by identity. Absence is `Ok(None)`, not an error.
    async fn fetch_by_id(
        &self,
        id: ProductId,
        mode: FetchMode,
    ) -> Result<Option<Product>, StoreError>;

    /// Count of the entire collection.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Stage a new product and commit; the store issues the identity.
    async fn insert(&self, draft: ProductDraft) -> Result<Committed, StoreError>;

    /// Stage a full-field replace of an existing product and commit.
    /// Affected-row count is 0 when the identity does not exist.
    async fn replace(&self, product: Product) -> Result<u64, StoreError>;

    /// Stage a hard delete and commit. Affected-row count is 0 when the
    /// identity does not exist.
    async fn remove(&self, id: ProductId) -> Result<u64, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).fetch_all().await
    }

    async fn fetch_by_id(
        &self,
        id: ProductId,
        mode: FetchMode,
    ) -> Result<Option<Product>, StoreError> {
        (**self).fetch_by_id(id, mode).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        (**self).count().await
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Committed, StoreError> {
        (**self).insert(draft).await
    }

    async fn replace(&self, product: Product) -> Result<u64, StoreError> {
        (**self).replace(product).await
    }

    async fn remove(&self, id: ProductId) -> Result<u64, StoreError> {
        (**self).remove(id).await
    }
}

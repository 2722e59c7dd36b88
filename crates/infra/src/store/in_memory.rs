use std::sync::RwLock;

use async_trait::async_trait;

use solemart_catalog::{Product, ProductDraft};
use solemart_core::{ImageId, ProductId};

use super::r#trait::{Committed, FetchMode, ProductStore, StoreError};

#[derive(Debug, Default)]
struct State {
    // Insertion order doubles as the natural order.
    products: Vec<Product>,
    last_id: i64,
}

/// In-memory product store.
///
/// Intended for tests/dev. Identity is a monotonic counter, so it behaves
/// like the serial column of the Postgres store. Not optimized for
/// performance.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    state: RwLock<State>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(state.products.clone())
    }

    async fn fetch_by_id(
        &self,
        id: ProductId,
        _mode: FetchMode,
    ) -> Result<Option<Product>, StoreError> {
        // Both fetch modes are equivalent here: callers always receive a
        // clone, never a live reference into the store.
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(state.products.len() as u64)
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Committed, StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StoreError::Commit("lock poisoned".to_string()))?;

        state.last_id += 1;
        let id = ProductId::new(state.last_id);
        // 1:1 ownership, so the image shares the product's serial.
        let product = draft.into_product(id, ImageId::new(state.last_id));
        state.products.push(product);

        Ok(Committed {
            id,
            rows_affected: 1,
        })
    }

    async fn replace(&self, product: Product) -> Result<u64, StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StoreError::Commit("lock poisoned".to_string()))?;

        match state.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn remove(&self, id: ProductId) -> Result<u64, StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StoreError::Commit("lock poisoned".to_string()))?;

        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        Ok((before - state.products.len()) as u64)
    }
}

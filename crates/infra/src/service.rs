//! Catalog query service and mutation gateway.
//!
//! `CatalogQuery` composes the pure building blocks from `solemart-catalog`
//! (predicates, sort resolution, pagination) over the store's product
//! collection. `MutationGateway` owns the create/update/delete path and its
//! uniform save confirmation. Both take the store by injection; store faults
//! propagate unmodified.

use tracing::{debug, info};

use solemart_catalog::{
    Brand, Category, Gender, PagingInfo, Product, ProductDraft, ProductPage, SortKey, filter,
    paginate,
};
use solemart_core::ProductId;

use crate::store::{Committed, FetchMode, ProductStore, StoreError};

/// Fixed sample size for the suggested-items feed.
const HINT_COUNT: usize = 10;

/// Read side of the catalog.
pub struct CatalogQuery<S> {
    store: S,
}

impl<S> CatalogQuery<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The entire catalog: sorted, then paged. `total_items` is the count
    /// of the whole collection.
    pub async fn list_all(
        &self,
        sort: SortKey,
        page: u32,
        page_size: u32,
    ) -> Result<ProductPage, StoreError> {
        let mut products = self.store.fetch_all().await?;
        sort.apply(&mut products);
        let (slice, skipped) = paginate(products, page, page_size);
        let total = self.store.count().await?;
        debug!(page, page_size, skipped, total, "list_all");
        Ok(ProductPage::new(
            slice,
            PagingInfo::new(total, page_size, page),
        ))
    }

    /// The entire catalog in natural order, unsorted and unpaged.
    pub async fn list_unpaged(&self) -> Result<Vec<Product>, StoreError> {
        self.store.fetch_all().await
    }

    /// Every product of one brand, unpaged.
    pub async fn list_by_brand(&self, brand: Brand) -> Result<Vec<Product>, StoreError> {
        self.list_matching(filter::by_brand(brand)).await
    }

    /// Every product of one category, unpaged.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Product>, StoreError> {
        self.list_matching(filter::by_category(category)).await
    }

    /// Every product of one gender, unpaged. `Gender::All` imposes no
    /// restriction and returns the full collection.
    pub async fn list_by_gender(&self, gender: Gender) -> Result<Vec<Product>, StoreError> {
        self.list_matching(filter::by_gender(gender)).await
    }

    /// Every product whose title equals `name` exactly (case-sensitive).
    pub async fn list_by_exact_name(&self, name: &str) -> Result<Vec<Product>, StoreError> {
        self.list_matching(filter::by_exact_title(name)).await
    }

    /// Every product with an active discount, unpaged.
    pub async fn list_deals(&self) -> Result<Vec<Product>, StoreError> {
        self.list_matching(filter::on_sale()).await
    }

    /// The first `HINT_COUNT` products in natural order, for the
    /// suggested-items widget.
    pub async fn list_hints(&self) -> Result<Vec<Product>, StoreError> {
        let mut products = self.store.fetch_all().await?;
        products.truncate(HINT_COUNT);
        Ok(products)
    }

    /// Point lookup by identity; `None` when absent. `mode` states whether
    /// the caller intends to mutate and save the product back.
    pub async fn get_by_id(
        &self,
        id: ProductId,
        mode: FetchMode,
    ) -> Result<Option<Product>, StoreError> {
        self.store.fetch_by_id(id, mode).await
    }

    /// Category page, optionally restricted by gender (`Gender::All` means
    /// no gender restriction), sorted and paged.
    ///
    /// `total_items` reports the whole collection count, same as
    /// `list_all` — not the filtered count. `search` is the one paged read
    /// that scopes its total to the filter.
    pub async fn list_by_category_and_gender(
        &self,
        category: Category,
        gender: Gender,
        sort: SortKey,
        page: u32,
        page_size: u32,
    ) -> Result<ProductPage, StoreError> {
        let mut products = self
            .list_matching(filter::by_category_and_gender(category, gender))
            .await?;
        sort.apply(&mut products);
        let (slice, skipped) = paginate(products, page, page_size);
        let total = self.store.count().await?;
        debug!(
            category = %category,
            gender = %gender,
            page,
            page_size,
            skipped,
            total,
            "list_by_category_and_gender"
        );
        Ok(ProductPage::new(
            slice,
            PagingInfo::new(total, page_size, page),
        ))
    }

    /// Title substring search, paged, no sort applied. `total_items` is the
    /// count of keyword matches across the whole collection.
    pub async fn search(
        &self,
        keyword: &str,
        page: u32,
        page_size: u32,
    ) -> Result<ProductPage, StoreError> {
        let matches = self.list_matching(filter::by_keyword(keyword)).await?;
        let total = matches.len() as u64;
        let (slice, _) = paginate(matches, page, page_size);
        debug!(keyword, page, page_size, total, "search");
        Ok(ProductPage::new(
            slice,
            PagingInfo::new(total, page_size, page),
        ))
    }

    async fn list_matching(
        &self,
        predicate: impl Fn(&Product) -> bool,
    ) -> Result<Vec<Product>, StoreError> {
        let mut products = self.store.fetch_all().await?;
        products.retain(|p| predicate(p));
        Ok(products)
    }
}

/// Write side of the catalog: add / update / delete with a uniform save
/// confirmation — a commit succeeded iff it affected at least one row.
pub struct MutationGateway<S> {
    store: S,
}

impl<S> MutationGateway<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stage a new product and commit. `Some(id)` with the store-assigned
    /// identity iff the commit affected rows.
    pub async fn add(&self, draft: ProductDraft) -> Result<Option<ProductId>, StoreError> {
        let Committed { id, rows_affected } = self.store.insert(draft).await?;
        info!(%id, rows_affected, "product added");
        Ok(saved(rows_affected).then_some(id))
    }

    /// Stage a full-field replace and commit.
    pub async fn update(&self, product: Product) -> Result<bool, StoreError> {
        let id = product.id;
        let rows_affected = self.store.replace(product).await?;
        info!(%id, rows_affected, "product updated");
        Ok(saved(rows_affected))
    }

    /// Delete by identity. An absent id is a negative result reported
    /// before anything is staged; a present id is removed and the commit's
    /// confirmation returned.
    pub async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        if self
            .store
            .fetch_by_id(id, FetchMode::ForUpdate)
            .await?
            .is_none()
        {
            debug!(%id, "delete target not found");
            return Ok(false);
        }

        let rows_affected = self.store.remove(id).await?;
        info!(%id, rows_affected, "product deleted");
        Ok(saved(rows_affected))
    }
}

fn saved(rows_affected: u64) -> bool {
    rows_affected > 0
}

//! Postgres-backed product store.
//!
//! Expects a `products` table (id BIGSERIAL, title TEXT, price_cents BIGINT,
//! sale_cents BIGINT, brand TEXT, category TEXT, gender TEXT) and an
//! `images` table (id BIGSERIAL, product_id BIGINT, url TEXT, alt TEXT).
//! Every read joins the image eagerly; schema/migration tooling is out of
//! scope for this crate.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use solemart_catalog::{Image, Product, ProductDraft};
use solemart_core::{ImageId, ProductId};

use super::r#trait::{Committed, FetchMode, ProductStore, StoreError};

const SELECT_PRODUCT: &str = "SELECT p.id, p.title, p.price_cents, p.sale_cents, \
     p.brand, p.category, p.gender, \
     i.id AS image_id, i.url AS image_url, i.alt AS image_alt \
     FROM products p JOIN images i ON i.product_id = p.id";

/// Product store on a PostgreSQL pool.
///
/// The pool is internally reference-counted and thread-safe; each method is
/// a single round-trip (reads) or a single transaction (mutations). Natural
/// order is id order, which matches insertion order for a serial column.
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a fresh pool. Connectivity faults surface as
    /// `StoreError::Connection`.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self::new(pool))
    }
}

fn query_err(e: sqlx::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

fn commit_err(e: sqlx::Error) -> StoreError {
    StoreError::Commit(e.to_string())
}

fn decode_cents(raw: i64, column: &str) -> Result<u64, StoreError> {
    u64::try_from(raw).map_err(|_| StoreError::Query(format!("negative {column} in store")))
}

fn encode_cents(value: u64, column: &str) -> Result<i64, StoreError> {
    i64::try_from(value).map_err(|_| StoreError::Commit(format!("{column} exceeds storable range")))
}

// Each call is a single autocommit round-trip; no cross-call transaction is
// held, so a row-lock clause would be released before the caller could act
// on it. Both fetch modes issue the same read; the mode records caller
// intent only.
fn lookup_sql(_mode: FetchMode) -> String {
    format!("{SELECT_PRODUCT} WHERE p.id = $1")
}

fn decode_product(row: &PgRow) -> Result<Product, StoreError> {
    let brand: String = row.try_get("brand").map_err(query_err)?;
    let category: String = row.try_get("category").map_err(query_err)?;
    let gender: String = row.try_get("gender").map_err(query_err)?;

    let product = Product {
        id: ProductId::new(row.try_get::<i64, _>("id").map_err(query_err)?),
        title: row.try_get("title").map_err(query_err)?,
        price: decode_cents(
            row.try_get::<i64, _>("price_cents").map_err(query_err)?,
            "price_cents",
        )?,
        sale: decode_cents(
            row.try_get::<i64, _>("sale_cents").map_err(query_err)?,
            "sale_cents",
        )?,
        brand: brand.parse().map_err(|e| StoreError::Query(format!("{e}")))?,
        category: category
            .parse()
            .map_err(|e| StoreError::Query(format!("{e}")))?,
        gender: gender.parse().map_err(|e| StoreError::Query(format!("{e}")))?,
        image: Image {
            id: ImageId::new(row.try_get::<i64, _>("image_id").map_err(query_err)?),
            url: row.try_get("image_url").map_err(query_err)?,
            alt: row.try_get("image_alt").map_err(query_err)?,
        },
    };

    // The wildcard is a filter value only; a row carrying it is corrupt.
    if product.gender.is_wildcard() {
        return Err(StoreError::Query(format!(
            "product {} stored with wildcard gender",
            product.id
        )));
    }

    Ok(product)
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(&format!("{SELECT_PRODUCT} ORDER BY p.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(query_err)?;
        rows.iter().map(decode_product).collect()
    }

    async fn fetch_by_id(
        &self,
        id: ProductId,
        mode: FetchMode,
    ) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(&lookup_sql(mode))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_err)?;
        row.as_ref().map(decode_product).transpose()
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(query_err)?;
        let total: i64 = row.try_get("total").map_err(query_err)?;
        Ok(total as u64)
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Committed, StoreError> {
        let mut tx = self.pool.begin().await.map_err(commit_err)?;

        let product_row = sqlx::query(
            "INSERT INTO products (title, price_cents, sale_cents, brand, category, gender) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&draft.title)
        .bind(encode_cents(draft.price, "price_cents")?)
        .bind(encode_cents(draft.sale, "sale_cents")?)
        .bind(draft.brand.as_str())
        .bind(draft.category.as_str())
        .bind(draft.gender.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(commit_err)?;
        let id: i64 = product_row.try_get("id").map_err(commit_err)?;

        let image_result = sqlx::query("INSERT INTO images (product_id, url, alt) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(&draft.image.url)
            .bind(&draft.image.alt)
            .execute(&mut *tx)
            .await
            .map_err(commit_err)?;

        tx.commit().await.map_err(commit_err)?;

        Ok(Committed {
            id: ProductId::new(id),
            rows_affected: 1 + image_result.rows_affected(),
        })
    }

    async fn replace(&self, product: Product) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await.map_err(commit_err)?;

        let product_result = sqlx::query(
            "UPDATE products SET title = $2, price_cents = $3, sale_cents = $4, \
             brand = $5, category = $6, gender = $7 WHERE id = $1",
        )
        .bind(product.id.as_i64())
        .bind(&product.title)
        .bind(encode_cents(product.price, "price_cents")?)
        .bind(encode_cents(product.sale, "sale_cents")?)
        .bind(product.brand.as_str())
        .bind(product.category.as_str())
        .bind(product.gender.as_str())
        .execute(&mut *tx)
        .await
        .map_err(commit_err)?;

        sqlx::query("UPDATE images SET url = $2, alt = $3 WHERE product_id = $1")
            .bind(product.id.as_i64())
            .bind(&product.image.url)
            .bind(&product.image.alt)
            .execute(&mut *tx)
            .await
            .map_err(commit_err)?;

        tx.commit().await.map_err(commit_err)?;

        // The confirmation contract counts entity rows, not image rows.
        Ok(product_result.rows_affected())
    }

    async fn remove(&self, id: ProductId) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await.map_err(commit_err)?;

        sqlx::query("DELETE FROM images WHERE product_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(commit_err)?;

        let product_result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(commit_err)?;

        tx.commit().await.map_err(commit_err)?;

        Ok(product_result.rows_affected())
    }
}

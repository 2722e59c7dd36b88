//! Catalog domain module.
//!
//! This crate contains the product data model and the pure query building
//! blocks (filter predicates, sort resolution, pagination). No IO, no HTTP,
//! no storage — the store boundary lives in `solemart-infra`.

pub mod filter;
pub mod page;
pub mod product;
pub mod sort;

pub use page::{PagingInfo, ProductPage, paginate};
pub use product::{Brand, Category, Gender, Image, NewImage, Product, ProductDraft};
pub use sort::SortKey;

//! Filter predicate builders.
//!
//! One constructor per filter dimension. Every predicate is total (no
//! panics, no errors) and pure; composition is logical AND only.

use crate::product::{Brand, Category, Gender, Product};

/// Exact brand equality.
pub fn by_brand(brand: Brand) -> impl Fn(&Product) -> bool {
    move |p| p.brand == brand
}

/// Exact category equality.
pub fn by_category(category: Category) -> impl Fn(&Product) -> bool {
    move |p| p.category == category
}

/// Exact gender equality; `Gender::All` degenerates to always-true.
pub fn by_gender(gender: Gender) -> impl Fn(&Product) -> bool {
    move |p| gender.is_wildcard() || p.gender == gender
}

/// Case-sensitive exact title equality (exact-name lookup).
pub fn by_exact_title(title: impl Into<String>) -> impl Fn(&Product) -> bool {
    let title = title.into();
    move |p| p.title == title
}

/// Case-sensitive substring containment against the title (search).
pub fn by_keyword(keyword: impl Into<String>) -> impl Fn(&Product) -> bool {
    let keyword = keyword.into();
    move |p| p.title.contains(&keyword)
}

/// Active discount present (`sale != 0`).
pub fn on_sale() -> impl Fn(&Product) -> bool {
    |p| p.has_discount()
}

/// Category AND gender. The `All` wildcard is resolved here, before
/// composition: it contributes no gender restriction to the combined test.
pub fn by_category_and_gender(category: Category, gender: Gender) -> impl Fn(&Product) -> bool {
    move |p| p.category == category && (gender.is_wildcard() || p.gender == gender)
}

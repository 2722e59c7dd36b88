//! Sort resolution: a closed set of recognized orderings over the catalog.
//!
//! The presentation layer hands us a free-form token; anything outside the
//! four recognized keys resolves to `Unsorted`, which keeps the store's
//! natural order. That fallthrough is deliberate, not an error.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Recognized sort keys, plus the no-op default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceLowest,
    PriceHighest,
    NameAsc,
    NameDesc,
    #[default]
    Unsorted,
}

impl SortKey {
    /// Resolve a sort token. Unrecognized tokens are `Unsorted`.
    pub fn parse(token: &str) -> Self {
        match token {
            "price_lowest" => SortKey::PriceLowest,
            "price_highest" => SortKey::PriceHighest,
            "name_asc" => SortKey::NameAsc,
            "name_desc" => SortKey::NameDesc,
            _ => SortKey::Unsorted,
        }
    }

    /// Resolve an optional query parameter; absence means `Unsorted`.
    pub fn from_param(token: Option<&str>) -> Self {
        token.map(Self::parse).unwrap_or_default()
    }

    /// Apply the ordering in place.
    ///
    /// All orderings are stable, so products with equal keys keep their
    /// natural (insertion) order. Title comparison uses `String`'s `Ord`
    /// (lexicographic over bytes).
    pub fn apply(self, products: &mut [Product]) {
        match self {
            SortKey::PriceLowest => products.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHighest => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::NameAsc => products.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::NameDesc => products.sort_by(|a, b| b.title.cmp(&a.title)),
            SortKey::Unsorted => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Brand, Category, Gender, Image};
    use solemart_core::{ImageId, ProductId};

    fn product(id: i64, title: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price,
            sale: 0,
            brand: Brand::Adidas,
            category: Category::Running,
            gender: Gender::Men,
            image: Image {
                id: ImageId::new(id),
                url: format!("https://img.example/{id}.jpg"),
                alt: title.to_string(),
            },
        }
    }

    fn seed() -> Vec<Product> {
        vec![
            product(1, "Ultraboost", 18_000),
            product(2, "Gazelle", 9_000),
            product(3, "Samba", 11_000),
        ]
    }

    #[test]
    fn recognized_tokens_resolve() {
        assert_eq!(SortKey::parse("price_lowest"), SortKey::PriceLowest);
        assert_eq!(SortKey::parse("price_highest"), SortKey::PriceHighest);
        assert_eq!(SortKey::parse("name_asc"), SortKey::NameAsc);
        assert_eq!(SortKey::parse("name_desc"), SortKey::NameDesc);
    }

    #[test]
    fn unrecognized_token_is_a_no_op() {
        assert_eq!(SortKey::parse("price_median"), SortKey::Unsorted);
        assert_eq!(SortKey::parse(""), SortKey::Unsorted);
        assert_eq!(SortKey::from_param(None), SortKey::Unsorted);

        let mut products = seed();
        let before = products.clone();
        SortKey::Unsorted.apply(&mut products);
        assert_eq!(products, before);
    }

    #[test]
    fn price_orderings_are_mirror_images() {
        // Distinct prices, so reversal is exact (ties would keep stable
        // insertion order instead).
        let mut lowest = seed();
        SortKey::PriceLowest.apply(&mut lowest);
        let prices: Vec<u64> = lowest.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![9_000, 11_000, 18_000]);

        let mut highest = seed();
        SortKey::PriceHighest.apply(&mut highest);
        lowest.reverse();
        assert_eq!(lowest, highest);
    }

    #[test]
    fn name_orderings_use_title() {
        let mut products = seed();
        SortKey::NameAsc.apply(&mut products);
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Gazelle", "Samba", "Ultraboost"]);

        SortKey::NameDesc.apply(&mut products);
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Ultraboost", "Samba", "Gazelle"]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut products = vec![
            product(1, "A", 10_000),
            product(2, "B", 10_000),
            product(3, "C", 9_000),
        ];
        SortKey::PriceLowest.apply(&mut products);
        let ids: Vec<i64> = products.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

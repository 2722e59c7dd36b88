//! Product data model: the catalog entity, its owned image, and the closed
//! brand/category/gender vocabularies.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use solemart_core::{DomainError, DomainResult, ImageId, ProductId};

/// Shoe brand carried by a product and usable as a filter dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    Nike,
    Adidas,
    Puma,
    Converse,
    Vans,
    NewBalance,
}

/// Product category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sneakers,
    Running,
    Football,
    Basketball,
    Sandals,
    Boots,
}

/// Target gender.
///
/// `All` is a filter-only wildcard ("impose no gender restriction"); it is
/// never a valid value on a stored product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    All,
    Men,
    Women,
    Kids,
}

impl Gender {
    /// True for the filter-only sentinel.
    pub fn is_wildcard(self) -> bool {
        self == Gender::All
    }
}

macro_rules! impl_token_enum {
    ($t:ty, $what:literal, { $($variant:path => $token:literal),+ $(,)? }) => {
        impl $t {
            /// Canonical token, matching the serde representation and the
            /// store's TEXT column encoding.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $token,)+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($variant),)+
                    other => Err(DomainError::validation(format!(
                        concat!("unknown ", $what, ": {}"),
                        other
                    ))),
                }
            }
        }
    };
}

impl_token_enum!(Brand, "brand", {
    Brand::Nike => "nike",
    Brand::Adidas => "adidas",
    Brand::Puma => "puma",
    Brand::Converse => "converse",
    Brand::Vans => "vans",
    Brand::NewBalance => "new_balance",
});

impl_token_enum!(Category, "category", {
    Category::Sneakers => "sneakers",
    Category::Running => "running",
    Category::Football => "football",
    Category::Basketball => "basketball",
    Category::Sandals => "sandals",
    Category::Boots => "boots",
});

impl_token_enum!(Gender, "gender", {
    Gender::All => "all",
    Gender::Men => "men",
    Gender::Women => "women",
    Gender::Kids => "kids",
});

/// Image owned by a product. No independent lifecycle: it is created with
/// its product and removed with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub url: String,
    pub alt: String,
}

/// Image payload for a not-yet-persisted product (no store-assigned id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImage {
    pub url: String,
    pub alt: String,
}

/// A catalog product as materialized from the store.
///
/// The image relation is owned inline, so every `Product` handed to a caller
/// has it resolved by construction. Prices and discounts are in the smallest
/// currency unit (cents); `sale == 0` means no active discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: u64,
    pub sale: u64,
    pub brand: Brand,
    pub category: Category,
    pub gender: Gender,
    pub image: Image,
}

impl Product {
    /// Whether the product carries an active discount.
    pub fn has_discount(&self) -> bool {
        self.sale != 0
    }
}

/// A product staged for insertion; the store issues the identity at commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: u64,
    pub sale: u64,
    pub brand: Brand,
    pub category: Category,
    pub gender: Gender,
    pub image: NewImage,
}

impl ProductDraft {
    /// Build a draft, rejecting input no stored product may carry: a blank
    /// title or the `Gender::All` wildcard.
    pub fn new(
        title: impl Into<String>,
        price: u64,
        sale: u64,
        brand: Brand,
        category: Category,
        gender: Gender,
        image: NewImage,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("product title must not be blank"));
        }
        if gender.is_wildcard() {
            return Err(DomainError::validation(
                "gender 'all' is a filter wildcard, not a product value",
            ));
        }
        Ok(Self {
            title,
            price,
            sale,
            brand,
            category,
            gender,
            image,
        })
    }

    /// Attach a store-assigned identity, yielding the persisted form.
    pub fn into_product(self, id: ProductId, image_id: ImageId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            sale: self.sale,
            brand: self.brand,
            category: self.category,
            gender: self.gender,
            image: Image {
                id: image_id,
                url: self.image.url,
                alt: self.image.alt,
            },
        }
    }
}

//! # Domain Types
//!
//! Core domain types used throughout the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   OrderLine     │   │     Origin      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  name           │   │  Dutch          │       │
//! │  │  category       │   │  quantity       │   │  German         │       │
//! │  │  unit_price     │   │  age_days       │   │  Belgium        │       │
//! │  │  discount_rule  │   │  weight_grams   │   └─────────────────┘       │
//! │  └─────────────────┘   │  origin (tag)   │                              │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐                                                    │
//! │  │ProductCategory  │   Drives both the discount policy (discount.rs)   │
//! │  │  ─────────────  │   and the receipt line shape (receipt.rs).        │
//! │  │  BREAD          │                                                    │
//! │  │  VEGETABLE      │                                                    │
//! │  │  BEER (unused)  │                                                    │
//! │  │  DUTCH_BEER     │                                                    │
//! │  │  GERMAN_BEER    │                                                    │
//! │  │  BELGIUM_BEER   │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Priced results (`PricedLine`, `PricedOrder`) live in [`crate::pricing`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{BREAD_NAME, VEGETABLE_NAME};

// =============================================================================
// Product Category
// =============================================================================

/// The family a catalog product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Bread,
    Vegetable,
    /// Generic beer without an origin. Never seeded; kept so catalogs that
    /// still carry it can be loaded. Earns no discount.
    Beer,
    DutchBeer,
    GermanBeer,
    BelgiumBeer,
}

impl ProductCategory {
    /// Whether the product is priced per 100 grams instead of per unit.
    #[inline]
    pub const fn is_sold_by_weight(&self) -> bool {
        matches!(self, ProductCategory::Vegetable)
    }
}

// =============================================================================
// Beer Origin
// =============================================================================

/// Country tag carried by beer order lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Dutch,
    German,
    Belgium,
}

impl Origin {
    /// Every origin, in the order merged beer lines are appended.
    pub const ALL: [Origin; 3] = [Origin::Dutch, Origin::German, Origin::Belgium];

    /// Parses the tag an order line carries. Matching is exact.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::Origin;
    ///
    /// assert_eq!(Origin::from_tag("German"), Some(Origin::German));
    /// assert_eq!(Origin::from_tag("german"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Origin> {
        Origin::ALL.into_iter().find(|origin| origin.tag() == tag)
    }

    /// The tag as it appears on an order line.
    pub const fn tag(&self) -> &'static str {
        match self {
            Origin::Dutch => "Dutch",
            Origin::German => "German",
            Origin::Belgium => "Belgium",
        }
    }

    /// The catalog name of this origin's beer, e.g. `"Dutch beer"`.
    pub const fn beer_name(&self) -> &'static str {
        match self {
            Origin::Dutch => "Dutch beer",
            Origin::German => "German beer",
            Origin::Belgium => "Belgium beer",
        }
    }

    /// Discount granted per full pack of six.
    pub fn pack_discount(&self) -> Money {
        match self {
            Origin::Dutch => Money::from_cents(200),
            Origin::German => Money::from_cents(400),
            Origin::Belgium => Money::from_cents(300),
        }
    }

    /// Checks whether `name` is one of the beer-family product names.
    pub fn is_beer_name(name: &str) -> bool {
        Origin::ALL.iter().any(|origin| origin.beer_name() == name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry. Read-only once it is in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique key; order lines refer to products by this name.
    pub name: String,

    pub category: ProductCategory,

    /// Price per unit, or per 100 grams for products sold by weight.
    pub unit_price: Money,

    /// Human-readable description of the discount. Display only.
    #[serde(default, alias = "discountRuleText")]
    pub discount_rule: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        name: impl Into<String>,
        category: ProductCategory,
        unit_price: Money,
        discount_rule: impl Into<String>,
    ) -> Self {
        Product {
            name: name.into(),
            category,
            unit_price,
            discount_rule: discount_rule.into(),
        }
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One entry of a submitted order.
///
/// Only the fields relevant to the product's family are read:
///
/// | family    | fields used            |
/// |-----------|------------------------|
/// | bread     | `quantity`, `age_days` |
/// | vegetable | `weight_grams`         |
/// | beer      | `quantity`, `origin`   |
///
/// Everything else is ignored, not validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default, alias = "age")]
    pub age_days: u32,

    #[serde(default, alias = "weight")]
    pub weight_grams: Decimal,

    /// Free-form origin tag (`"Dutch"`, `"German"`, `"Belgium"`).
    #[serde(default)]
    pub origin: String,
}

impl OrderLine {
    /// A line of some counted product, e.g. a product with no discount.
    pub fn counted(name: impl Into<String>, quantity: u32) -> Self {
        OrderLine {
            name: name.into(),
            quantity,
            ..OrderLine::default()
        }
    }

    /// A bread line.
    pub fn bread(quantity: u32, age_days: u32) -> Self {
        OrderLine {
            name: BREAD_NAME.to_string(),
            quantity,
            age_days,
            ..OrderLine::default()
        }
    }

    /// A vegetable line.
    pub fn vegetable(weight_grams: Decimal) -> Self {
        OrderLine {
            name: VEGETABLE_NAME.to_string(),
            weight_grams,
            ..OrderLine::default()
        }
    }

    /// A beer line whose name and origin tag agree.
    pub fn beer(origin: Origin, quantity: u32) -> Self {
        OrderLine {
            name: origin.beer_name().to_string(),
            quantity,
            origin: origin.tag().to_string(),
            ..OrderLine::default()
        }
    }

    /// Overrides the origin tag, keeping the name.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Whether this line belongs to the vegetable family.
    #[inline]
    pub fn is_vegetable(&self) -> bool {
        self.name == VEGETABLE_NAME
    }

    /// The origin this line aggregates under, if it is a beer line.
    ///
    /// Requires a beer-family name and a recognized origin tag. The name
    /// and the tag need not agree: a `"German beer"` line tagged `"Dutch"`
    /// counts as Dutch.
    pub fn beer_origin(&self) -> Option<Origin> {
        if Origin::is_beer_name(&self.name) {
            Origin::from_tag(&self.origin)
        } else {
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

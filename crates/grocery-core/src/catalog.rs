//! # Product Catalog
//!
//! The pricing engine only needs two things from wherever products live:
//! find one by name, and enumerate them all. [`ProductLookup`] is that
//! seam. [`InMemoryCatalog`] is the implementation shipped with the crate.
//!
//! ```text
//! ┌───────────────────┐   find_product("bread")   ┌──────────────────────┐
//! │  Pricing Engine   │ ─────────────────────────►│  impl ProductLookup  │
//! │  (pricing.rs)     │ ◄───────── Product ────────│  InMemoryCatalog,    │
//! └───────────────────┘                           │  a cache, a DB, ...  │
//!                                                 └──────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Origin, Product, ProductCategory};
use crate::validation::{validate_product_name, validate_unit_price, ValidationResult};
use crate::{BREAD_NAME, VEGETABLE_NAME};

// =============================================================================
// Lookup Trait
// =============================================================================

/// Read access to a product catalog.
///
/// Implementations must be side-effect free from the engine's point of
/// view; a caching or remote-backed implementation is fine as long as it
/// answers synchronously.
pub trait ProductLookup {
    /// Finds a product by its exact name.
    fn find_product(&self, name: &str) -> Option<Product>;

    /// Lists every product, in the catalog's own order.
    fn list_products(&self) -> Vec<Product>;
}

impl<T: ProductLookup + ?Sized> ProductLookup for &T {
    fn find_product(&self, name: &str) -> Option<Product> {
        (**self).find_product(name)
    }

    fn list_products(&self) -> Vec<Product> {
        (**self).list_products()
    }
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// A catalog held in memory, keyed by product name.
///
/// Insertion order is preserved for [`ProductLookup::list_products`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with the default grocery assortment.
    ///
    /// | name         | category     | unit price      |
    /// |--------------|--------------|-----------------|
    /// | bread        | BREAD        | €1.00           |
    /// | vegetable    | VEGETABLE    | €1.00 per 100 g |
    /// | Dutch beer   | DUTCH_BEER   | €0.50           |
    /// | German beer  | GERMAN_BEER  | €1.00           |
    /// | Belgium beer | BELGIUM_BEER | €0.75           |
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::{InMemoryCatalog, Money, ProductLookup};
    ///
    /// let catalog = InMemoryCatalog::with_defaults();
    /// let beer = catalog.find_product("Belgium beer").unwrap();
    /// assert_eq!(beer.unit_price, Money::from_cents(75));
    /// ```
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for product in default_products() {
            catalog.push(product);
        }
        catalog
    }

    /// Builds a catalog from products, validating each one.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> ValidationResult<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// Parses a JSON array of products.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::{InMemoryCatalog, ProductLookup};
    ///
    /// let json = r#"[{"name": "bread", "category": "BREAD", "unitPrice": "1.25"}]"#;
    /// let catalog = InMemoryCatalog::from_json(json).unwrap();
    /// assert!(catalog.find_product("bread").is_some());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Ok(Self::from_products(products)?)
    }

    /// Adds a product.
    ///
    /// ## Errors
    /// - blank or overlong name
    /// - negative unit price
    /// - a product with the same name already exists
    pub fn insert(&mut self, product: Product) -> ValidationResult<()> {
        validate_product_name(&product.name)?;
        validate_unit_price(product.unit_price)?;

        if self.index.contains_key(&product.name) {
            return Err(ValidationError::Duplicate {
                field: "name".to_string(),
                value: product.name,
            });
        }

        debug!(name = %product.name, category = ?product.category, "catalog insert");
        self.push(product);
        Ok(())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn push(&mut self, product: Product) {
        self.index.insert(product.name.clone(), self.products.len());
        self.products.push(product);
    }
}

impl ProductLookup for InMemoryCatalog {
    fn find_product(&self, name: &str) -> Option<Product> {
        self.index.get(name).map(|&i| self.products[i].clone())
    }

    fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }
}

fn default_products() -> Vec<Product> {
    vec![
        Product::new(
            BREAD_NAME,
            ProductCategory::Bread,
            Money::from_cents(100),
            "No discount on bread one day old or newer. On breads 3 days old buy 1 take 2.",
        ),
        Product::new(
            VEGETABLE_NAME,
            ProductCategory::Vegetable,
            Money::from_cents(100),
            "5% discount if you buy up to 100g in same order. 7% discount if you buy 100 to 500g. \
             10% discount if you buy more than 500g.",
        ),
        Product::new(
            Origin::Dutch.beer_name(),
            ProductCategory::DutchBeer,
            Money::from_cents(50),
            "€ 2,00 for each Dutch beer pack.",
        ),
        Product::new(
            Origin::German.beer_name(),
            ProductCategory::GermanBeer,
            Money::from_cents(100),
            "€ 4,00 for each German beer pack.",
        ),
        Product::new(
            Origin::Belgium.beer_name(),
            ProductCategory::BelgiumBeer,
            Money::from_cents(75),
            "€ 3,00 for each Belgium beer pack.",
        ),
    ]
}

// =============================================================================
// Catalog Queries
// =============================================================================

/// Maps every product name to its unit price.
pub fn list_prices<C: ProductLookup + ?Sized>(catalog: &C) -> BTreeMap<String, Money> {
    catalog
        .list_products()
        .into_iter()
        .map(|product| (product.name, product.unit_price))
        .collect()
}

/// Lists every product's discount rule text, in catalog order.
pub fn list_discount_rules<C: ProductLookup + ?Sized>(catalog: &C) -> Vec<String> {
    catalog
        .list_products()
        .into_iter()
        .map(|product| product.discount_rule)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

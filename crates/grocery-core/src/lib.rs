//! # grocery-core: Pure Pricing Logic for Grocery Orders
//!
//! This crate prices a grocery order and renders its receipt. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Grocery Pricing Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                grocery-receipt (apps/grocery-cli)               │   │
//! │  │     config ──► catalog ──► read order JSON ──► print receipt   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ price_order(lines, &catalog)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ grocery-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ normalize │─►│  pricing  │─►│  receipt  │  │ validation│  │   │
//! │  │   │ merge     │  │ gross/net │  │ text      │  │ rules     │  │   │
//! │  │   │ lines     │  │ total     │  │ format    │  │ checks    │  │   │
//! │  │   └───────────┘  └─────┬─────┘  └───────────┘  └───────────┘  │   │
//! │  │                        │                                        │   │
//! │  │             ┌──────────┴──────────┐                             │   │
//! │  │             ▼                     ▼                             │   │
//! │  │       ┌───────────┐         ┌───────────┐                      │   │
//! │  │       │ discount  │         │  catalog  │  ProductLookup       │   │
//! │  │       │ per cat.  │         │  (trait)  │  InMemoryCatalog     │   │
//! │  │       └───────────┘         └───────────┘                      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, OrderLine, Origin, ProductCategory)
//! - [`money`] - Money type over exact decimals, rounded only for display
//! - [`catalog`] - The `ProductLookup` seam and an in-memory catalog
//! - [`normalize`] - Merging split vegetable and beer lines
//! - [`discount`] - Per-category discount policies
//! - [`pricing`] - The pricing pipeline (`price_order`)
//! - [`receipt`] - Receipt text rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same lines + same catalog = same receipt
//! 2. **No I/O**: the catalog is a trait, the caller decides where it lives
//! 3. **Exact Money**: decimals throughout, rounded half-up only on the receipt
//! 4. **All or Nothing**: any error aborts the order, no partial receipt
//!
//! ## Example Usage
//!
//! ```rust
//! use grocery_core::{price_order, InMemoryCatalog, OrderLine, Origin};
//! use rust_decimal::Decimal;
//!
//! let catalog = InMemoryCatalog::with_defaults();
//! let lines = vec![
//!     OrderLine::bread(6, 6),
//!     OrderLine::beer(Origin::Belgium, 5),
//!     OrderLine::vegetable(Decimal::from(90)),
//! ];
//!
//! let receipt = price_order(&lines, &catalog).unwrap();
//! assert!(receipt.text.ends_with("Total: €6.61\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod normalize;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use grocery_core::Money` instead of
// `use grocery_core::money::Money`

pub use catalog::{list_discount_rules, list_prices, InMemoryCatalog, ProductLookup};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use pricing::{price_lines, price_order, PricedLine, PricedOrder, Receipt};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Catalog name of the bread product.
pub const BREAD_NAME: &str = "bread";

/// Catalog name of the vegetable product. Lines with this name are merged
/// by weight.
pub const VEGETABLE_NAME: &str = "vegetable";

/// Units in one beer pack, the smallest quantity that earns a discount.
pub const BEER_PACK_SIZE: u32 = 6;

/// Oldest bread, in days, that may still be sold.
pub const MAX_BREAD_AGE_DAYS: u32 = 6;

//! # Pricing Engine
//!
//! Turns submitted order lines into a priced order and a receipt.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lines ──► validate_order ──► normalize ──► for each line:             │
//! │                                               │                         │
//! │                                               ├─► catalog.find_product  │
//! │                                               ├─► gross                 │
//! │                                               ├─► DiscountPolicy.apply  │
//! │                                               └─► total += net          │
//! │                                                     │                   │
//! │                                      PricedOrder ◄──┘                   │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                                   receipt::render ──► Receipt           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any error aborts the whole order. There is never a partial receipt.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::ProductLookup;
use crate::discount::DiscountPolicy;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::normalize::normalize;
use crate::receipt;
use crate::types::{OrderLine, ProductCategory};
use crate::validation::validate_order;

// =============================================================================
// Priced Line
// =============================================================================

/// A normalized order line with its catalog price and discount resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    #[serde(flatten)]
    pub line: OrderLine,

    /// Category of the resolved product.
    pub category: ProductCategory,

    /// Unit price copied from the catalog at pricing time.
    pub unit_price: Money,

    /// Price before discount.
    pub gross: Money,

    pub discount_amount: Money,

    /// Price after discount.
    pub net: Money,
}

impl PricedLine {
    /// Prices `line` at `unit_price` less `discount_amount`.
    ///
    /// Weighed products are priced per 100 grams, everything else per unit.
    ///
    /// ## Errors
    /// [`CoreError::Overflow`] if gross or net is outside the decimal range.
    pub fn new(
        line: OrderLine,
        category: ProductCategory,
        unit_price: Money,
        discount_amount: Money,
    ) -> CoreResult<Self> {
        let gross = if category.is_sold_by_weight() {
            unit_price.checked_for_weight(line.weight_grams)
        } else {
            unit_price.checked_mul_quantity(line.quantity)
        };
        let net = gross.and_then(|gross| gross.checked_sub(discount_amount));
        let (Some(gross), Some(net)) = (gross, net) else {
            return Err(CoreError::Overflow(format!("price of {}", line.name)));
        };

        Ok(PricedLine {
            line,
            category,
            unit_price,
            gross,
            discount_amount,
            net,
        })
    }
}

// =============================================================================
// Priced Order
// =============================================================================

/// A fully priced order, in normalized line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedOrder {
    pub lines: Vec<PricedLine>,

    /// Sum of every line's net price, unrounded.
    pub total_price: Money,
}

impl PricedOrder {
    /// Renders the customer receipt.
    pub fn receipt(&self) -> Receipt {
        Receipt {
            text: receipt::render(self),
            total: self.total_price,
        }
    }

    /// The normalized lines, without pricing.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines.iter().map(|priced| priced.line.clone()).collect()
    }
}

/// The rendered receipt and the exact total it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub text: String,
    pub total: Money,
}

// =============================================================================
// Pricing
// =============================================================================

/// Normalizes and prices `lines` against `catalog`.
///
/// ## Errors
/// - [`CoreError::EmptyOrder`] if `lines` is empty
/// - [`CoreError::Validation`] if a line is malformed
/// - [`CoreError::ProductNotFound`] if a line names an unknown product
/// - [`CoreError::InvalidOrderLine`] for bread older than six days
/// - [`CoreError::Overflow`] if an aggregate or amount is out of range
pub fn price_lines<C: ProductLookup + ?Sized>(
    lines: &[OrderLine],
    catalog: &C,
) -> CoreResult<PricedOrder> {
    if let Err(err) = validate_order(lines) {
        warn!(error = %err, "order rejected");
        return Err(err);
    }

    let order = normalize(lines).and_then(|normalized| price_normalized(normalized, catalog));
    if let Err(err) = &order {
        warn!(error = %err, "order rejected");
    }
    order
}

fn price_normalized<C: ProductLookup + ?Sized>(
    normalized: Vec<OrderLine>,
    catalog: &C,
) -> CoreResult<PricedOrder> {
    let mut priced = Vec::with_capacity(normalized.len());
    let mut total_price = Money::zero();

    for line in normalized {
        let priced_line = price_line(line, catalog)?;
        total_price = total_price
            .checked_add(priced_line.net)
            .ok_or_else(|| CoreError::Overflow("order total".to_string()))?;
        priced.push(priced_line);
    }

    info!(lines = priced.len(), total = %total_price, "order priced");

    Ok(PricedOrder {
        lines: priced,
        total_price,
    })
}

/// Prices `lines` and renders the receipt.
///
/// ## Example
/// ```rust
/// use grocery_core::{price_order, InMemoryCatalog, OrderLine};
///
/// let catalog = InMemoryCatalog::with_defaults();
/// let receipt = price_order(&[OrderLine::bread(3, 3)], &catalog).unwrap();
///
/// assert_eq!(
///     receipt.text,
///     "Order details:\n3 x bread (3 days old): €2.00\nTotal: €2.00\n"
/// );
/// ```
pub fn price_order<C: ProductLookup + ?Sized>(
    lines: &[OrderLine],
    catalog: &C,
) -> CoreResult<Receipt> {
    price_lines(lines, catalog).map(|order| order.receipt())
}

fn price_line<C: ProductLookup + ?Sized>(
    line: OrderLine,
    catalog: &C,
) -> CoreResult<PricedLine> {
    let product = catalog
        .find_product(&line.name)
        .ok_or_else(|| CoreError::ProductNotFound(line.name.clone()))?;

    let discount_amount =
        DiscountPolicy::for_category(product.category).apply(&line, product.unit_price)?;

    let priced = PricedLine::new(line, product.category, product.unit_price, discount_amount)?;

    debug!(
        name = %priced.line.name,
        gross = %priced.gross,
        discount = %priced.discount_amount,
        "line priced"
    );

    Ok(priced)
}

// =============================================================================
// Unit Tests
// =============================================================================

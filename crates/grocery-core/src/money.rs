//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ROUNDING PROBLEM                                                   │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  With integer cents:                                                    │
//! │    5% of €0.90 = €0.045 → 4 or 5 cents, decided too early  ❌           │
//! │                                                                         │
//! │  OUR SOLUTION: exact base-10 Decimal                                    │
//! │    €0.90 - €0.045 = €0.855 kept exactly                                 │
//! │    Rounded half-up to €0.86 only when the receipt is rendered          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocery_core::money::Money;
//!
//! let price = Money::from_cents(75);                // €0.75
//! let line = price.checked_mul_quantity(5).unwrap(); // €3.75
//! assert_eq!(line.to_string(), "€3.75");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places shown for currency on a receipt.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Currency symbol printed in front of every amount.
pub const CURRENCY_SYMBOL: &str = "€";

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 700 bps = 7%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from whole percent.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        DiscountRate(percent * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (700 bps → 0.07).
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in euros, held at full decimal precision.
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► PricedLine.gross ──┬──► PricedLine.net
///                                           │
///        Discount Engine ──► discount_amount┘
///
/// Σ PricedLine.net ──► PricedOrder.total_price ──► "Total: €6.61"
/// ```
///
/// Only [`Money::rounded`] and `Display` ever drop precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::Money;
    ///
    /// let price = Money::from_cents(50);
    /// assert_eq!(price.to_string(), "€0.50");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, CURRENCY_DECIMAL_PLACES))
    }

    /// Returns the exact amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds half-up (midpoint away from zero) to whole cents.
    ///
    /// The result always carries exactly two decimal places, so `0.5`
    /// becomes `0.50`.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let net = Money::new(Decimal::new(855, 3)); // 0.855
    /// assert_eq!(net.rounded().amount(), Decimal::new(86, 2));
    /// ```
    pub fn rounded(&self) -> Money {
        let mut amount = self.0.round_dp_with_strategy(
            CURRENCY_DECIMAL_PLACES,
            RoundingStrategy::MidpointAwayFromZero,
        );
        amount.rescale(CURRENCY_DECIMAL_PLACES);
        Money(amount)
    }

    /// Returns `rate` percent of this amount, unrounded.
    ///
    /// `None` if the result falls outside the decimal range.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::{DiscountRate, Money};
    /// use rust_decimal::Decimal;
    ///
    /// let weighted = Money::from_cents(90);
    /// let discount = weighted.checked_percentage(DiscountRate::from_percent(5)).unwrap();
    /// assert_eq!(discount.amount(), Decimal::new(45, 3)); // 0.045
    /// ```
    pub fn checked_percentage(&self, rate: DiscountRate) -> Option<Money> {
        self.0.checked_mul(rate.as_fraction()).map(Money)
    }

    /// Prices a weighed product: this amount is the price per 100 grams.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let per_100g = Money::from_cents(100);
    /// let price = per_100g.checked_for_weight(Decimal::from(300));
    /// assert_eq!(price, Some(Money::from_cents(300)));
    /// ```
    pub fn checked_for_weight(&self, weight_grams: Decimal) -> Option<Money> {
        self.0
            .checked_mul(weight_grams)
            .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
            .map(Money)
    }

    /// Multiplies money by a unit count (quantities, packs).
    #[inline]
    pub fn checked_mul_quantity(&self, qty: u32) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the receipt prints it: `€6.61`, `-€0.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, rounded.abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Discount Engine
//!
//! Pure functions computing the discount for one priced line.
//!
//! ## Dispatch Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductCategory        DiscountPolicy    Keyed on                      │
//! │  ─────────────────────  ───────────────   ───────────────────────────   │
//! │  BREAD                  AgeTiered         age_days, quantity            │
//! │  VEGETABLE              WeightTiered      weight_grams (merged)         │
//! │  DUTCH/GERMAN/BELGIUM   PackTiered        quantity (merged), origin     │
//! │  BEER                   NoDiscount        -                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding a category means adding an enum variant; the exhaustive match in
//! [`DiscountPolicy::for_category`] will not compile until it has a policy.

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::money::{DiscountRate, Money};
use crate::types::{OrderLine, Origin, ProductCategory};
use crate::{BEER_PACK_SIZE, MAX_BREAD_AGE_DAYS};

/// How a category's discount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountPolicy {
    /// Older bread is cheaper: see [`bread_discount`].
    AgeTiered,
    /// Bigger vegetable purchases get a bigger rate: see [`vegetable_discount`].
    WeightTiered,
    /// A flat amount per full six-pack: see [`beer_discount`].
    PackTiered,
    NoDiscount,
}

impl DiscountPolicy {
    /// The policy for a category.
    pub const fn for_category(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Bread => DiscountPolicy::AgeTiered,
            ProductCategory::Vegetable => DiscountPolicy::WeightTiered,
            ProductCategory::DutchBeer
            | ProductCategory::GermanBeer
            | ProductCategory::BelgiumBeer => DiscountPolicy::PackTiered,
            ProductCategory::Beer => DiscountPolicy::NoDiscount,
        }
    }

    /// Computes the discount for `line` at `unit_price`.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidOrderLine`] for bread older than six days
    /// - [`CoreError::Overflow`] if the discount is outside the decimal range
    pub fn apply(&self, line: &OrderLine, unit_price: Money) -> CoreResult<Money> {
        match self {
            DiscountPolicy::AgeTiered => bread_discount(line, unit_price),
            DiscountPolicy::WeightTiered => vegetable_discount(line.weight_grams, unit_price),
            DiscountPolicy::PackTiered => beer_discount(line.quantity, &line.origin),
            DiscountPolicy::NoDiscount => Ok(Money::zero()),
        }
    }
}

// =============================================================================
// Bread
// =============================================================================

/// Age-tiered bread discount.
///
/// | age_days | discount                              |
/// |----------|---------------------------------------|
/// | 0-1      | none                                  |
/// | 2-3      | one free per two (`price × ⌊q/2⌋`)     |
/// | 4-6      | two free per three (`price × 2⌊q/3⌋`)  |
/// | 7+       | cannot be sold                        |
///
/// ## Example
/// ```rust
/// use grocery_core::discount::bread_discount;
/// use grocery_core::{Money, OrderLine};
///
/// let discount = bread_discount(&OrderLine::bread(3, 3), Money::from_cents(100)).unwrap();
/// assert_eq!(discount, Money::from_cents(100));
///
/// assert!(bread_discount(&OrderLine::bread(1, 7), Money::from_cents(100)).is_err());
/// ```
pub fn bread_discount(line: &OrderLine, unit_price: Money) -> CoreResult<Money> {
    let quantity = line.quantity;
    let free_units = match line.age_days {
        0..=1 => 0,
        2..=3 => quantity / 2,
        // ⌊q/3⌋ ≤ u32::MAX / 3, so doubling cannot overflow
        4..=MAX_BREAD_AGE_DAYS => 2 * (quantity / 3),
        _ => {
            return Err(CoreError::InvalidOrderLine {
                name: line.name.clone(),
                reason: format!(
                    "bread older than {} days cannot be ordered (got {} days)",
                    MAX_BREAD_AGE_DAYS, line.age_days
                ),
            })
        }
    };

    unit_price.checked_mul_quantity(free_units).ok_or_else(|| {
        CoreError::Overflow(format!("discount for {} x {}", quantity, line.name))
    })
}

// =============================================================================
// Vegetables
// =============================================================================

/// The rate a vegetable purchase of `weight_grams` earns.
///
/// | weight        | rate |
/// |---------------|------|
/// | ≤ 100 g       | 5%   |
/// | 100 g – 500 g | 7%   |
/// | > 500 g       | 10%  |
pub fn vegetable_discount_rate(weight_grams: Decimal) -> DiscountRate {
    if weight_grams <= Decimal::ONE_HUNDRED {
        DiscountRate::from_percent(5)
    } else if weight_grams <= Decimal::from(500) {
        DiscountRate::from_percent(7)
    } else {
        DiscountRate::from_percent(10)
    }
}

/// Weight-tiered vegetable discount.
///
/// The rate applies to the whole weighted price, not marginally per
/// bracket: 600 g earns 10% on all 600 g.
///
/// ## Example
/// ```rust
/// use grocery_core::discount::vegetable_discount;
/// use grocery_core::Money;
/// use rust_decimal::Decimal;
///
/// let discount = vegetable_discount(Decimal::from(500), Money::from_cents(100));
/// assert_eq!(discount.unwrap(), Money::from_cents(35));
/// ```
pub fn vegetable_discount(weight_grams: Decimal, unit_price: Money) -> CoreResult<Money> {
    let rate = vegetable_discount_rate(weight_grams);
    unit_price
        .checked_for_weight(weight_grams)
        .and_then(|weighted| weighted.checked_percentage(rate))
        .ok_or_else(|| {
            CoreError::Overflow(format!("discount for {} g of vegetables", weight_grams))
        })
}

// =============================================================================
// Beer
// =============================================================================

/// Pack-tiered beer discount: a flat amount per full pack of six.
///
/// Partial packs earn nothing, and an unrecognized origin tag earns
/// nothing.
///
/// ## Example
/// ```rust
/// use grocery_core::discount::beer_discount;
/// use grocery_core::Money;
///
/// assert_eq!(beer_discount(13, "German").unwrap(), Money::from_cents(800));
/// assert_eq!(beer_discount(5, "German").unwrap(), Money::zero());
/// assert_eq!(beer_discount(12, "Irish").unwrap(), Money::zero());
/// ```
pub fn beer_discount(quantity: u32, origin: &str) -> CoreResult<Money> {
    let packs = quantity / BEER_PACK_SIZE;
    let Some(origin) = Origin::from_tag(origin).filter(|_| packs > 0) else {
        return Ok(Money::zero());
    };

    origin.pack_discount().checked_mul_quantity(packs).ok_or_else(|| {
        CoreError::Overflow(format!("discount for {} packs of {}", packs, origin.beer_name()))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn euro() -> Money {
        Money::from_cents(100)
    }

    #[rstest]
    #[case(0, 5, 0)]
    #[case(1, 5, 0)]
    #[case(2, 1, 0)]
    #[case(2, 2, 100)]
    #[case(3, 3, 100)]
    #[case(3, 5, 200)]
    #[case(4, 2, 0)]
    #[case(4, 3, 200)]
    #[case(6, 6, 400)]
    #[case(6, 8, 400)]
    #[case(5, 9, 600)]
    fn test_bread_tiers(#[case] age: u32, #[case] quantity: u32, #[case] expected_cents: i64) {
        let discount = bread_discount(&OrderLine::bread(quantity, age), euro()).unwrap();
        assert_eq!(discount, Money::from_cents(expected_cents));
    }

    #[rstest]
    #[case(7)]
    #[case(30)]
    fn test_stale_bread_is_rejected(#[case] age: u32) {
        let err = bread_discount(&OrderLine::bread(1, age), euro()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidOrderLine { ref name, .. } if name == "bread"));
    }

    #[test]
    fn test_bread_discount_scales_with_price() {
        let discount = bread_discount(&OrderLine::bread(4, 2), Money::from_cents(250)).unwrap();
        assert_eq!(discount, Money::from_cents(500));
    }

    #[rstest]
    #[case(dec!(0), 500)]
    #[case(dec!(100), 500)]
    #[case(dec!(100.5), 700)]
    #[case(dec!(500), 700)]
    #[case(dec!(500.1), 1000)]
    #[case(dec!(2000), 1000)]
    fn test_vegetable_brackets(#[case] weight: Decimal, #[case] expected_bps: u32) {
        assert_eq!(vegetable_discount_rate(weight).bps(), expected_bps);
    }

    #[test]
    fn test_vegetable_rate_applies_to_whole_price() {
        assert_eq!(vegetable_discount(dec!(90), euro()).unwrap().amount(), dec!(0.045));
        assert_eq!(vegetable_discount(dec!(600), euro()).unwrap().amount(), dec!(0.6));
        assert_eq!(
            vegetable_discount(dec!(200), Money::from_cents(150)).unwrap().amount(),
            dec!(0.21)
        );
    }

    #[rstest]
    #[case(5, "Dutch", 0)]
    #[case(6, "Dutch", 200)]
    #[case(11, "Dutch", 200)]
    #[case(12, "German", 800)]
    #[case(18, "Belgium", 900)]
    #[case(6, "", 0)]
    #[case(6, "dutch", 0)]
    fn test_beer_packs(#[case] quantity: u32, #[case] origin: &str, #[case] expected_cents: i64) {
        assert_eq!(beer_discount(quantity, origin).unwrap(), Money::from_cents(expected_cents));
    }

    #[test]
    fn test_out_of_range_discounts_are_errors() {
        let huge = Money::new(Decimal::MAX);
        let err = bread_discount(&OrderLine::bread(4, 2), huge).unwrap_err();
        assert!(matches!(err, CoreError::Overflow(_)));

        let err = vegetable_discount(Decimal::MAX, Money::from_cents(200)).unwrap_err();
        assert!(matches!(err, CoreError::Overflow(_)));

        // The largest possible quantity still fits.
        let discount = beer_discount(u32::MAX, "German").unwrap();
        assert_eq!(discount, Money::from_cents(400 * i64::from(u32::MAX / 6)));
    }

    #[test]
    fn test_policy_table() {
        assert_eq!(
            DiscountPolicy::for_category(ProductCategory::Bread),
            DiscountPolicy::AgeTiered
        );
        assert_eq!(
            DiscountPolicy::for_category(ProductCategory::Vegetable),
            DiscountPolicy::WeightTiered
        );
        for category in [
            ProductCategory::DutchBeer,
            ProductCategory::GermanBeer,
            ProductCategory::BelgiumBeer,
        ] {
            assert_eq!(DiscountPolicy::for_category(category), DiscountPolicy::PackTiered);
        }
        assert_eq!(
            DiscountPolicy::for_category(ProductCategory::Beer),
            DiscountPolicy::NoDiscount
        );
    }

    #[test]
    fn test_generic_beer_earns_nothing() {
        let line = OrderLine::beer(Origin::German, 12);
        let discount = DiscountPolicy::NoDiscount.apply(&line, euro()).unwrap();
        assert!(discount.is_zero());
    }
}

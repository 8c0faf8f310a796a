//! # Order Normalizer
//!
//! Collapses split lines of the same merge-eligible family so that tiered
//! discounts see the real aggregate, however the customer split the order.
//!
//! ## Merge Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Family      Aggregate            Merge when        Synthetic line      │
//! │  ─────────   ──────────────────   ───────────────   ─────────────────   │
//! │  vegetable   Σ weight_grams       Σ > 0             vegetable, Σ g      │
//! │  beer        Σ quantity per       Σ ≥ 6 (one pack)  "<Origin> beer",    │
//! │              origin tag                             Σ units, origin     │
//! │  bread       -                    never             -                   │
//! │  other       -                    never             -                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Untouched lines keep their relative order. Synthetic lines are appended
//! after them: vegetable first, then Dutch, German, Belgium beer.
//!
//! ## Example
//! ```text
//! in:  [Dutch beer ×2, bread ×1, vegetable 300g, Dutch beer ×4, vegetable 200g]
//! out: [bread ×1, vegetable 500g, Dutch beer ×6]
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{OrderLine, Origin};
use crate::BEER_PACK_SIZE;

/// Returns the normalized copy of `lines`. The input is not modified.
///
/// Normalizing an already-normalized sequence returns it unchanged.
///
/// ## Errors
/// [`CoreError::Overflow`] if an aggregate does not fit its field.
///
/// ## Example
/// ```rust
/// use grocery_core::normalize::normalize;
/// use grocery_core::{OrderLine, Origin};
///
/// let lines = vec![OrderLine::beer(Origin::Dutch, 3); 2];
/// let merged = normalize(&lines).unwrap();
/// assert_eq!(merged, vec![OrderLine::beer(Origin::Dutch, 6)]);
/// ```
pub fn normalize(lines: &[OrderLine]) -> CoreResult<Vec<OrderLine>> {
    let vegetable_weight = total_vegetable_weight(lines)
        .ok_or_else(|| CoreError::Overflow("total vegetable weight".to_string()))?;
    let merge_vegetables = vegetable_weight > Decimal::ZERO;

    let mut merged_beers: Vec<(Origin, u32)> = Vec::with_capacity(Origin::ALL.len());
    for origin in Origin::ALL {
        let quantity = total_beer_quantity(lines, origin).ok_or_else(|| {
            CoreError::Overflow(format!("total quantity of {}", origin.beer_name()))
        })?;
        if quantity >= BEER_PACK_SIZE {
            merged_beers.push((origin, quantity));
        }
    }

    let is_merged = |line: &OrderLine| {
        if merge_vegetables && line.is_vegetable() {
            return true;
        }
        line.beer_origin()
            .is_some_and(|origin| merged_beers.iter().any(|&(merged, _)| merged == origin))
    };

    let mut normalized: Vec<OrderLine> =
        lines.iter().filter(|&line| !is_merged(line)).cloned().collect();

    if merge_vegetables {
        debug!(weight_grams = %vegetable_weight, "merged vegetable lines");
        normalized.push(OrderLine::vegetable(vegetable_weight));
    }

    for (origin, quantity) in merged_beers {
        debug!(origin = origin.tag(), quantity, "merged beer lines");
        normalized.push(OrderLine::beer(origin, quantity));
    }

    Ok(normalized)
}

/// Sum of `weight_grams` over every vegetable line, or `None` past the
/// decimal range.
pub fn total_vegetable_weight(lines: &[OrderLine]) -> Option<Decimal> {
    lines
        .iter()
        .filter(|line| line.is_vegetable())
        .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.weight_grams))
}

/// Sum of `quantity` over every beer line tagged with `origin`, or `None`
/// past `u32::MAX`.
pub fn total_beer_quantity(lines: &[OrderLine], origin: Origin) -> Option<u32> {
    lines
        .iter()
        .filter(|line| line.beer_origin() == Some(origin))
        .try_fold(0u32, |acc, line| acc.checked_add(line.quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================

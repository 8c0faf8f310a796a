//! # Validation Module
//!
//! Input validation for orders and catalog entries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Types: quantity/age are unsigned, weight is a decimal             │
//! │  └── Missing fields default to zero / empty                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Order has at least one line                                       │
//! │  ├── Every line names a product                                        │
//! │  └── Vegetable weight is not negative                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing                                                      │
//! │  ├── Product exists in the catalog                                     │
//! │  └── Bread is at most six days old                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocery_core::validation::{validate_order, validate_product_name};
//! use grocery_core::OrderLine;
//!
//! validate_product_name("bread").unwrap();
//! assert!(validate_order(&[]).is_err());
//! assert!(validate_order(&[OrderLine::bread(1, 0)]).is_ok());
//! ```

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::OrderLine;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name a catalog accepts.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use grocery_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Dutch beer").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates a single order line.
///
/// ## Rules
/// - `name` must not be blank
/// - vegetable lines must not carry a negative weight
///
/// Weight on non-vegetable lines is never read, so it is not checked.
pub fn validate_order_line(line: &OrderLine) -> ValidationResult<()> {
    if line.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if line.is_vegetable() && line.weight_grams < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "weight".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole order before it is normalized.
///
/// ## Errors
/// - [`CoreError::EmptyOrder`] if there are no lines
/// - [`CoreError::Validation`] for the first malformed line
pub fn validate_order(lines: &[OrderLine]) -> CoreResult<()> {
    if lines.is_empty() {
        return Err(CoreError::EmptyOrder);
    }

    for line in lines {
        validate_order_line(line)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("vegetable").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(75)).is_ok());
        assert_eq!(
            validate_unit_price(Money::from_cents(-1)),
            Err(ValidationError::MustNotBeNegative {
                field: "unit price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_order_line() {
        assert!(validate_order_line(&OrderLine::bread(2, 3)).is_ok());
        assert!(validate_order_line(&OrderLine::counted(" ", 1)).is_err());
        assert!(validate_order_line(&OrderLine::vegetable(dec!(-5))).is_err());

        // Weight is irrelevant to bread, so a bogus value is ignored.
        let mut bread = OrderLine::bread(1, 0);
        bread.weight_grams = dec!(-5);
        assert!(validate_order_line(&bread).is_ok());
    }

    #[test]
    fn test_validate_order() {
        assert!(matches!(validate_order(&[]), Err(CoreError::EmptyOrder)));
        assert!(matches!(
            validate_order(&[OrderLine::bread(1, 0), OrderLine::counted("", 1)]),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert!(validate_order(&[OrderLine::vegetable(dec!(100))]).is_ok());
    }
}

//! # Receipt Formatter
//!
//! Renders a [`PricedOrder`] as the fixed-format text receipt.
//!
//! ```text
//! Order details:
//! 6 x bread (6 days old): €2.00        ◄── LineShape::AgedBread
//! 5 x Belgium beer: €3.75              ◄── LineShape::Counted
//! 90.0 g x vegetable: €0.86            ◄── LineShape::Weighed
//! Total: €6.61
//! ```
//!
//! Amounts are net of discount and rounded half-up to cents here, and only
//! here. The shape of a line follows the resolved product category, so a
//! weighed product keeps its weight format whatever it is called.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::pricing::{PricedLine, PricedOrder};
use crate::types::ProductCategory;

/// First line of every receipt.
pub const RECEIPT_HEADER: &str = "Order details:";

/// Decimal places shown for a weight.
const WEIGHT_DECIMAL_PLACES: u32 = 1;

/// How a receipt line is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// `500.0 g x vegetable: €4.65`
    Weighed,
    /// `3 x bread (3 days old): €2.00`
    AgedBread,
    /// `6 x Dutch beer: €1.00`
    Counted,
}

impl LineShape {
    pub const fn for_category(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Vegetable => LineShape::Weighed,
            ProductCategory::Bread => LineShape::AgedBread,
            ProductCategory::Beer
            | ProductCategory::DutchBeer
            | ProductCategory::GermanBeer
            | ProductCategory::BelgiumBeer => LineShape::Counted,
        }
    }
}

/// Renders the whole receipt. Every line, including the last, ends in `\n`.
pub fn render(order: &PricedOrder) -> String {
    let mut out = String::from(RECEIPT_HEADER);
    out.push('\n');

    for line in &order.lines {
        out.push_str(&render_line(line));
        out.push('\n');
    }

    out.push_str(&format!("Total: {}\n", order.total_price));
    out
}

/// Renders one priced line, without the trailing newline.
pub fn render_line(priced: &PricedLine) -> String {
    let line = &priced.line;
    let net = priced.net;

    match LineShape::for_category(priced.category) {
        LineShape::Weighed => {
            format!("{} g x {}: {}", format_weight(line.weight_grams), line.name, net)
        }
        LineShape::AgedBread => format!(
            "{} x {} ({} days old): {}",
            line.quantity, line.name, line.age_days, net
        ),
        LineShape::Counted => format!("{} x {}: {}", line.quantity, line.name, net),
    }
}

fn format_weight(weight_grams: Decimal) -> String {
    let mut weight = weight_grams
        .round_dp_with_strategy(WEIGHT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    weight.rescale(WEIGHT_DECIMAL_PLACES);
    weight.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{OrderLine, Origin};
    use rust_decimal_macros::dec;

    fn priced(
        line: OrderLine,
        category: ProductCategory,
        unit_cents: i64,
        discount: Money,
    ) -> PricedLine {
        PricedLine::new(line, category, Money::from_cents(unit_cents), discount).unwrap()
    }

    #[test]
    fn test_weight_formatting() {
        assert_eq!(format_weight(dec!(500)), "500.0");
        assert_eq!(format_weight(dec!(90)), "90.0");
        assert_eq!(format_weight(dec!(12.25)), "12.3");
        assert_eq!(format_weight(dec!(12.24)), "12.2");
    }

    #[test]
    fn test_line_shapes() {
        let bread = priced(
            OrderLine::bread(3, 3),
            ProductCategory::Bread,
            100,
            Money::from_cents(100),
        );
        assert_eq!(render_line(&bread), "3 x bread (3 days old): €2.00");

        let veg = priced(
            OrderLine::vegetable(dec!(90)),
            ProductCategory::Vegetable,
            100,
            Money::new(dec!(0.045)),
        );
        assert_eq!(render_line(&veg), "90.0 g x vegetable: €0.86");

        let beer = priced(
            OrderLine::beer(Origin::Dutch, 6),
            ProductCategory::DutchBeer,
            50,
            Money::from_cents(200),
        );
        assert_eq!(render_line(&beer), "6 x Dutch beer: €1.00");
    }

    #[test]
    fn test_shape_follows_category_not_name() {
        let mut line = OrderLine::vegetable(dec!(250));
        line.name = "carrots".to_string();
        let carrots = priced(line, ProductCategory::Vegetable, 200, Money::new(dec!(0.35)));

        assert_eq!(render_line(&carrots), "250.0 g x carrots: €4.65");
    }

    #[test]
    fn test_render_full_receipt() {
        let order = PricedOrder {
            lines: vec![
                priced(
                    OrderLine::bread(6, 6),
                    ProductCategory::Bread,
                    100,
                    Money::from_cents(400),
                ),
                priced(
                    OrderLine::beer(Origin::Belgium, 5),
                    ProductCategory::BelgiumBeer,
                    75,
                    Money::zero(),
                ),
            ],
            total_price: Money::from_cents(575),
        };

        assert_eq!(
            render(&order),
            "Order details:\n\
             6 x bread (6 days old): €2.00\n\
             5 x Belgium beer: €3.75\n\
             Total: €5.75\n"
        );
    }
}

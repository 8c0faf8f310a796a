//! Order document parsing.
//!
//! Two shapes are accepted:
//!
//! ```json
//! [{"name": "bread", "quantity": 3, "age": 3}]
//! ```
//!
//! ```json
//! {"orderItems": [{"name": "vegetable", "weight": 300.0}]}
//! ```

use grocery_core::OrderLine;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OrderDocument {
    Lines(Vec<OrderLine>),
    Wrapped {
        #[serde(rename = "orderItems", alias = "lines")]
        order_items: Vec<OrderLine>,
    },
}

/// Parses an order document into its lines.
///
/// An empty list parses fine; rejecting it is the pricing engine's job.
pub fn parse_order(json: &str) -> Result<Vec<OrderLine>, serde_json::Error> {
    let document: OrderDocument = serde_json::from_str(json)?;
    Ok(match document {
        OrderDocument::Lines(lines) => lines,
        OrderDocument::Wrapped { order_items } => order_items,
    })
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::PricedItem;

/// Printable summary of a placed order, produced by `print_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub location: String,
    pub items: Vec<PricedItem>,
    /// Raw sum of item prices, before surcharge or discount
    pub subtotal: Decimal,
    pub total: Decimal,
    /// Set only when the customer has a student ID and the total came out
    /// below the raw subtotal
    pub discount_applied: bool,
    pub estimated_minutes: i32,
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Order Summary ===")?;
        writeln!(f, "Delivery to: {}", self.location)?;
        writeln!(f)?;
        writeln!(f, "Items ordered:")?;
        for item in &self.items {
            writeln!(f, " - {}", item)?;
        }
        writeln!(f)?;
        writeln!(f, "Subtotal: ${:.2}", self.subtotal)?;
        if self.discount_applied {
            writeln!(f, "Student discount applied!")?;
        }
        writeln!(f, "Total after discount: ${:.2}", self.total)?;
        writeln!(f, "Estimated delivery time: {} minutes", self.estimated_minutes)
    }
}

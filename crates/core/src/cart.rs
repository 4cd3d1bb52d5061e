//! Shopping cart accumulator and order-summary rendering
//!
//! The cart itself is client-local state; this type is the single place its
//! read-modify-write rules live. One delta is applied at a time.

use serde::{Deserialize, Serialize};

use crate::catalog::format_price;
use crate::reply::CartDelta;

/// One cart line. Uniqueness key is (product name, size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> u32 {
        self.price * self.quantity
    }
}

/// Fixed per-order surcharges added on top of the item subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCharges {
    pub handling: u32,
    pub delivery: u32,
}

impl Default for OrderCharges {
    fn default() -> Self {
        Self {
            handling: 10,
            delivery: 60,
        }
    }
}

/// Ordered collection of cart lines; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from persisted JSON. Malformed state is treated as
    /// "no saved cart" rather than an error.
    pub fn restore(saved: &str) -> Self {
        match serde_json::from_str(saved) {
            Ok(cart) => cart,
            Err(error) => {
                tracing::debug!(%error, "discarding unparseable saved cart");
                Self::default()
            }
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line totals, before surcharges.
    pub fn subtotal(&self) -> u32 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Add `quantity` of a product, merging into an existing line with the
    /// same (name, size) key.
    pub fn add(&mut self, name: &str, price: u32, quantity: u32, size: Option<&str>) {
        if quantity == 0 {
            return;
        }
        let existing = self
            .items
            .iter_mut()
            .find(|item| item.name == name && item.size.as_deref() == size);
        match existing {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem {
                name: name.to_string(),
                price,
                quantity,
                size: size.map(str::to_owned),
            }),
        }
    }

    /// Apply an assistant-produced cart delta (no size selection).
    pub fn apply_delta(&mut self, delta: &CartDelta) {
        self.add(&delta.name, delta.price, delta.quantity, None);
    }

    /// Adjust a line's quantity by `change`; the line is removed when its
    /// quantity would drop to zero.
    pub fn change_quantity(&mut self, name: &str, size: Option<&str>, change: i64) {
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.name == name && item.size.as_deref() == size)
        else {
            return;
        };
        let updated = self.items[index].quantity as i64 + change;
        if updated <= 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = updated as u32;
        }
    }

    pub fn remove(&mut self, name: &str, size: Option<&str>) {
        self.items
            .retain(|item| !(item.name == name && item.size.as_deref() == size));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Grand total including surcharges. Surcharges apply only to non-empty
    /// carts.
    pub fn grand_total(&self, charges: &OrderCharges) -> u32 {
        if self.is_empty() {
            return 0;
        }
        self.subtotal() + charges.handling + charges.delivery
    }

    /// Human-readable order summary: numbered lines, subtotal, surcharges,
    /// grand total. This is what gets handed to the outbound messaging link.
    pub fn order_summary(&self, charges: &OrderCharges) -> String {
        let mut lines = vec!["Order Summary:".to_string()];
        for (index, item) in self.items.iter().enumerate() {
            let size = item
                .size
                .as_deref()
                .map(|s| format!(" (Size: {})", s))
                .unwrap_or_default();
            lines.push(format!(
                "{}. {}{} x{} - {}",
                index + 1,
                item.name,
                size,
                item.quantity,
                format_price(item.line_total()),
            ));
        }
        lines.push(String::new());
        lines.push(format!("Subtotal: {}", format_price(self.subtotal())));
        lines.push(format!("Handling: {}", format_price(charges.handling)));
        lines.push(format!("Delivery: {}", format_price(charges.delivery)));
        lines.push(format!("Total: {}", format_price(self.grand_total(charges))));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_on_name_and_size() {
        let mut cart = Cart::new();
        cart.add("Black Designer Punjabi", 957, 1, None);
        cart.add("Black Designer Punjabi", 957, 2, None);
        cart.add("Black Designer Punjabi", 957, 1, Some("XL"));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.subtotal(), 957 * 4);
    }

    #[test]
    fn test_deltas_accumulate() {
        let mut cart = Cart::new();
        cart.apply_delta(&CartDelta {
            name: "Navy Blue Designer Punjabi".to_string(),
            price: 1047,
            quantity: 2,
        });
        cart.apply_delta(&CartDelta {
            name: "Red Katan Blouse".to_string(),
            price: 349,
            quantity: 1,
        });

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), 2 * 1047 + 349);
    }

    #[test]
    fn test_quantity_drop_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add("Tant Cotton Saree", 899, 2, None);
        cart.change_quantity("Tant Cotton Saree", None, -1);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.change_quantity("Tant Cotton Saree", None, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_restore_swallows_malformed_state() {
        let cart = Cart::restore("{not json at all");
        assert!(cart.is_empty());

        let mut saved = Cart::new();
        saved.add("Jamdani Saree", 2999, 1, None);
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(Cart::restore(&json), saved);
    }

    #[test]
    fn test_order_summary_lines_and_totals() {
        let mut cart = Cart::new();
        cart.add("Black Designer Punjabi", 957, 2, None);
        cart.add("Red Katan Blouse", 349, 1, Some("36"));

        let summary = cart.order_summary(&OrderCharges::default());
        assert!(summary.contains("1. Black Designer Punjabi x2 - ₹1914"));
        assert!(summary.contains("2. Red Katan Blouse (Size: 36) x1 - ₹349"));
        assert!(summary.contains("Subtotal: ₹2263"));
        assert!(summary.contains("Total: ₹2333"));
    }

    #[test]
    fn test_empty_cart_has_zero_grand_total() {
        assert_eq!(Cart::new().grand_total(&OrderCharges::default()), 0);
    }
}

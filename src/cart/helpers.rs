//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart formatting.

use super::models::Cart;

/// Produces a human-readable one-line summary of the cart.
///
/// Example output: `"2x Kelly 20 Sellier, 1x Love Bracelet"`.
pub fn format_item_summary(cart: &Cart) -> String {
    cart.items()
        .map(|i| format!("{}x {}", i.qty, i.product.title))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_summary() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        assert_eq!(format_item_summary(&cart), "");

        let kelly = catalog.find("p1").unwrap();
        cart.add(kelly);
        cart.add(kelly);
        cart.add(catalog.find("p4").unwrap());
        assert_eq!(
            format_item_summary(&cart),
            "2x Kelly 20 Sellier, 1x Love Bracelet"
        );
    }
}

use serde::Serialize;

use glowly_core::IDR_PER_UNIT;

use crate::cart::CartStore;

/// Subtotal (in Rupiah) at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD_IDR: i64 = 300_000;
pub const SHIPPING_FEE_IDR: i64 = 25_000;

/// Order totals in whole Rupiah, as shown on the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub item_count: u32,
    pub subtotal: i64,
    pub shipping: i64,
    pub grand_total: i64,
    /// How much more would unlock free shipping; `None` once it is free.
    pub remaining_for_free_shipping: Option<i64>,
}

impl CheckoutSummary {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_cart(cart: &CartStore) -> Self {
        let subtotal = (cart.total_price() * IDR_PER_UNIT).round() as i64;
        let (shipping, remaining_for_free_shipping) = if subtotal >= FREE_SHIPPING_THRESHOLD_IDR {
            (0, None)
        } else {
            (
                SHIPPING_FEE_IDR,
                Some(FREE_SHIPPING_THRESHOLD_IDR - subtotal),
            )
        };

        Self {
            item_count: cart.total_items(),
            subtotal,
            shipping,
            grand_total: subtotal + shipping,
            remaining_for_free_shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use glowly_core::ProductSummary;

    use super::*;

    fn cart_with(price: f64, quantity: u32) -> CartStore {
        let mut cart = CartStore::new();
        cart.add_to_cart(
            ProductSummary {
                id: 1,
                title: "Serum".to_owned(),
                price,
                image: String::new(),
            },
            quantity,
        );
        cart
    }

    #[test]
    fn below_threshold_charges_shipping() {
        // 2 x 9.5 = 19.0 → Rp 285.000
        let summary = CheckoutSummary::from_cart(&cart_with(9.5, 2));
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.subtotal, 285_000);
        assert_eq!(summary.shipping, 25_000);
        assert_eq!(summary.grand_total, 310_000);
        assert_eq!(summary.remaining_for_free_shipping, Some(15_000));
    }

    #[test]
    fn at_threshold_ships_free() {
        // 2 x 10.0 = 20.0 → Rp 300.000
        let summary = CheckoutSummary::from_cart(&cart_with(10.0, 2));
        assert_eq!(summary.shipping, 0);
        assert_eq!(summary.grand_total, 300_000);
        assert!(summary.remaining_for_free_shipping.is_none());
    }

    #[test]
    fn empty_cart_summary() {
        let summary = CheckoutSummary::from_cart(&CartStore::new());
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.subtotal, 0);
        assert_eq!(summary.shipping, SHIPPING_FEE_IDR);
    }
}

use glowly_core::{ProductId, ProductSummary};

use crate::cart::{AddOutcome, CartLine, CartStore};
use crate::checkout::CheckoutSummary;
use crate::toast::{ToastKind, ToastQueue};
use crate::wishlist::{WishlistEntry, WishlistStore};

const STORE_NAME: &str = "Glowly Beauty";

/// One shopper's browsing session.
///
/// Owns the cart and wishlist and holds a handle to the toast queue, which
/// the presentation layer can clone to render notifications. Each action
/// method applies the store mutation and then raises the matching toast.
#[derive(Debug, Default)]
pub struct Session {
    cart: CartStore,
    wishlist: WishlistStore,
    toasts: ToastQueue,
}

impl Session {
    #[must_use]
    pub fn new(toasts: ToastQueue) -> Self {
        Self {
            cart: CartStore::new(),
            wishlist: WishlistStore::new(),
            toasts,
        }
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn add_to_cart(&mut self, item: ProductSummary, quantity: u32) -> AddOutcome {
        let subtext = if quantity > 1 {
            format!("{quantity}x {}", item.title)
        } else {
            item.title.clone()
        };
        let product_id = item.id;

        let outcome = self.cart.add_to_cart(item, quantity);
        let message = match outcome {
            AddOutcome::Inserted => "Added to cart!",
            AddOutcome::Increased => "Cart updated!",
            AddOutcome::Ignored => return outcome,
        };

        tracing::debug!(product_id, quantity, "added to cart");
        self.toasts
            .show_toast(message, ToastKind::Success, Some(subtext));
        outcome
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLine> {
        let removed = self.cart.remove_from_cart(id)?;
        self.toasts
            .show_toast(format!("{} removed", removed.title), ToastKind::Info, None);
        Some(removed)
    }

    /// Quantity steppers on the cart page change lines without a toast.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        self.cart.update_quantity(id, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear_cart();
        self.toasts.show_toast("Cart cleared", ToastKind::Info, None);
    }

    /// Returns `true` if the product is saved afterwards.
    pub fn toggle_wishlist(&mut self, item: ProductSummary) -> bool {
        let title = item.title.clone();
        let saved = self.wishlist.toggle_wishlist(item);
        let message = if saved {
            "Saved to wishlist ♥"
        } else {
            "Removed from wishlist"
        };
        self.toasts
            .show_toast(message, ToastKind::Wishlist, Some(title));
        saved
    }

    /// Saves without a toast; already-saved products are left as they are.
    pub fn add_to_wishlist(&mut self, item: ProductSummary) {
        self.wishlist.add_to_wishlist(item);
    }

    pub fn remove_from_wishlist(&mut self, id: ProductId) -> Option<WishlistEntry> {
        self.wishlist.remove_from_wishlist(id)
    }

    /// Places the order: summarizes and empties the cart.
    ///
    /// An empty cart places nothing and raises an error toast instead.
    pub fn checkout(&mut self) -> Option<CheckoutSummary> {
        if self.cart.is_empty() {
            self.toasts
                .show_toast("Your cart is empty", ToastKind::Error, None);
            return None;
        }

        let summary = CheckoutSummary::from_cart(&self.cart);
        self.cart.clear_cart();
        tracing::info!(
            items = summary.item_count,
            grand_total = summary.grand_total,
            "order placed"
        );
        self.toasts.show_toast(
            "Order placed! 🎉",
            ToastKind::Success,
            Some(format!("Thank you for shopping at {STORE_NAME}")),
        );
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ProductId, title: &str) -> ProductSummary {
        ProductSummary {
            id,
            title: title.to_owned(),
            price: 10.0,
            image: String::new(),
        }
    }

    fn last_toast(session: &Session) -> crate::Toast {
        session.toasts().toasts().pop().expect("expected a toast")
    }

    #[tokio::test(start_paused = true)]
    async fn add_to_cart_toasts_added_then_updated() {
        let mut session = Session::default();

        session.add_to_cart(item(1, "Lip Oil"), 1);
        let toast = last_toast(&session);
        assert_eq!(toast.message, "Added to cart!");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.subtext.as_deref(), Some("Lip Oil"));

        session.add_to_cart(item(1, "Lip Oil"), 3);
        let toast = last_toast(&session);
        assert_eq!(toast.message, "Cart updated!");
        assert_eq!(toast.subtext.as_deref(), Some("3x Lip Oil"));
        assert_eq!(session.cart().items()[0].quantity, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn add_zero_quantity_raises_no_toast() {
        let mut session = Session::default();
        assert_eq!(session.add_to_cart(item(1, "Lip Oil"), 0), AddOutcome::Ignored);
        assert!(session.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn remove_from_cart_toasts_title() {
        let mut session = Session::default();
        session.add_to_cart(item(2, "Night Cream"), 1);
        assert!(session.remove_from_cart(2).is_some());
        let toast = last_toast(&session);
        assert_eq!(toast.message, "Night Cream removed");
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn remove_absent_line_is_silent() {
        let mut session = Session::default();
        assert!(session.remove_from_cart(2).is_none());
        assert!(session.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_wishlist_toasts_both_directions() {
        let mut session = Session::default();

        assert!(session.toggle_wishlist(item(3, "Eau de Parfum")));
        assert_eq!(last_toast(&session).message, "Saved to wishlist ♥");
        assert_eq!(last_toast(&session).kind, ToastKind::Wishlist);

        assert!(!session.toggle_wishlist(item(3, "Eau de Parfum")));
        assert_eq!(last_toast(&session).message, "Removed from wishlist");
        assert!(session.wishlist().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn add_to_wishlist_is_idempotent_and_silent() {
        let mut session = Session::default();
        session.add_to_wishlist(item(5, "Rose Toner"));
        session.add_to_wishlist(item(5, "Rose Toner"));

        assert_eq!(session.wishlist().len(), 1);
        assert!(session.wishlist().is_in_wishlist(5));
        assert!(session.toasts().is_empty());

        assert!(session.remove_from_wishlist(5).is_some());
        assert!(session.wishlist().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn checkout_clears_cart_and_summarizes() {
        let mut session = Session::default();
        session.add_to_cart(item(1, "Serum"), 2);

        let summary = session.checkout().expect("non-empty cart");
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.subtotal, 300_000);
        assert!(session.cart().is_empty());

        let toast = last_toast(&session);
        assert_eq!(toast.message, "Order placed! 🎉");
        assert_eq!(
            toast.subtext.as_deref(),
            Some("Thank you for shopping at Glowly Beauty")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn checkout_empty_cart_is_refused() {
        let mut session = Session::default();
        assert!(session.checkout().is_none());
        assert_eq!(last_toast(&session).kind, ToastKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cart_toasts() {
        let mut session = Session::default();
        session.add_to_cart(item(1, "Serum"), 1);
        session.clear_cart();
        assert!(session.cart().is_empty());
        assert_eq!(last_toast(&session).message, "Cart cleared");
    }

    #[tokio::test(start_paused = true)]
    async fn session_toasts_expire() {
        let mut session = Session::new(ToastQueue::default());
        session.add_to_cart(item(1, "Serum"), 1);
        tokio::time::sleep(std::time::Duration::from_millis(3600)).await;
        assert!(session.toasts().is_empty());
        assert!(session.cart().is_in_cart(1));
    }
}

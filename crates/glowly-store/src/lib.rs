//! Session-scoped storefront state: cart, wishlist, and toast notifications.
//!
//! Each store owns its entries and is mutated only through its own methods.
//! [`Session`] bundles them and pairs every user action with the toast the
//! storefront shows for it.

pub mod cart;
pub mod checkout;
pub mod session;
pub mod toast;
pub mod wishlist;

pub use cart::{AddOutcome, CartLine, CartStore, MAX_LINE_QUANTITY};
pub use checkout::CheckoutSummary;
pub use session::Session;
pub use toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_CAPACITY, DEFAULT_TOAST_TTL};
pub use wishlist::{WishlistEntry, WishlistStore};

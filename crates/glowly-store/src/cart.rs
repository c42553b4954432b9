use serde::{Deserialize, Serialize};

use glowly_core::{ProductId, ProductSummary};

/// Upper bound on a single line's quantity. Excess is discarded silently.
pub const MAX_LINE_QUANTITY: u32 = 10;

/// One product in the cart. `quantity` is always in `1..=MAX_LINE_QUANTITY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// What [`CartStore::add_to_cart`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was created.
    Inserted,
    /// An existing line's quantity was raised (possibly capped).
    Increased,
    /// Nothing changed because the requested quantity was zero.
    Ignored,
}

/// The shopping cart: lines keyed by product id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `item`, merging into an existing line by id.
    ///
    /// The resulting quantity is capped at [`MAX_LINE_QUANTITY`].
    pub fn add_to_cart(&mut self, item: ProductSummary, quantity: u32) -> AddOutcome {
        if quantity == 0 {
            return AddOutcome::Ignored;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity).min(MAX_LINE_QUANTITY);
            return AddOutcome::Increased;
        }

        self.lines.push(CartLine {
            id: item.id,
            title: item.title,
            price: item.price,
            image: item.image,
            quantity: quantity.min(MAX_LINE_QUANTITY),
        });
        AddOutcome::Inserted
    }

    /// Removes the line for `id`, returning it. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.id == id)?;
        Some(self.lines.remove(idx))
    }

    /// Sets the quantity of an existing line; `0` removes it.
    ///
    /// Ids not in the cart are ignored.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity.min(MAX_LINE_QUANTITY);
        }
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.lines.iter().any(|l| l.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line quantities, recomputed on each call.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity`, recomputed on each call.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

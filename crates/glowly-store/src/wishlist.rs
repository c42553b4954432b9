use glowly_core::{ProductId, ProductSummary};

/// A saved product. Membership is binary; there is no quantity.
pub type WishlistEntry = ProductSummary;

/// Saved products keyed by id, in the order they were saved.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    entries: Vec<WishlistEntry>,
}

impl WishlistStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `item` unless an entry with the same id already exists.
    pub fn add_to_wishlist(&mut self, item: WishlistEntry) {
        if !self.is_in_wishlist(item.id) {
            self.entries.push(item);
        }
    }

    /// Drops the entry for `id`, returning it if it was present.
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> Option<WishlistEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    /// Flips membership of `item`. Returns `true` if it is saved afterwards.
    pub fn toggle_wishlist(&mut self, item: WishlistEntry) -> bool {
        if self.remove_from_wishlist(item.id).is_some() {
            false
        } else {
            self.entries.push(item);
            true
        }
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: ProductId) -> WishlistEntry {
        ProductSummary {
            id,
            title: format!("Saved {id}"),
            price: 12.0,
            image: String::new(),
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(entry(1));
        wishlist.add_to_wishlist(entry(1));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.is_in_wishlist(1));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(entry(1));
        assert!(wishlist.remove_from_wishlist(2).is_none());
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn remove_present_returns_entry() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(entry(1));
        assert_eq!(wishlist.remove_from_wishlist(1).map(|e| e.id), Some(1));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut wishlist = WishlistStore::new();
        assert!(wishlist.toggle_wishlist(entry(3)));
        assert!(wishlist.is_in_wishlist(3));
        assert!(!wishlist.toggle_wishlist(entry(3)));
        assert!(!wishlist.is_in_wishlist(3));
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(entry(1));
        wishlist.add_to_wishlist(entry(2));
        let before: Vec<_> = wishlist.entries().iter().map(|e| e.id).collect();

        for id in [2, 5] {
            wishlist.toggle_wishlist(entry(id));
            wishlist.toggle_wishlist(entry(id));
        }

        let mut after: Vec<_> = wishlist.entries().iter().map(|e| e.id).collect();
        after.sort_unstable();
        assert_eq!(after, before);
    }

    #[test]
    fn entries_keep_save_order() {
        let mut wishlist = WishlistStore::new();
        for id in [4, 1, 9] {
            wishlist.add_to_wishlist(entry(id));
        }
        let ids: Vec<_> = wishlist.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, [4, 1, 9]);
    }
}

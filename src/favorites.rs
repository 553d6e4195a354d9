use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::listing::ListingId;

// In-memory favorites membership. Lifecycle is bound to the running
// session; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesSet {
    ids: HashSet<ListingId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds an absent id, removes a present one. Returns the new membership.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        if self.ids.insert(id) {
            true
        } else {
            self.ids.remove(&id);
            false
        }
    }

    pub fn is_favorite(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ListingId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoritesSet::new();

        assert!(!favorites.is_favorite(3));
        assert!(favorites.toggle(3));
        assert!(favorites.is_favorite(3));
        assert_eq!(favorites.count(), 1);

        assert!(!favorites.toggle(3));
        assert!(!favorites.is_favorite(3));
        assert!(favorites.is_empty());
    }

    // Double toggle returns the set to its prior state, whatever that was
    #[test]
    fn test_double_toggle_is_involution() {
        let mut favorites = FavoritesSet::new();
        favorites.toggle(1);
        favorites.toggle(5);

        let before = favorites.clone();
        favorites.toggle(5);
        favorites.toggle(5);
        assert_eq!(favorites, before);

        favorites.toggle(7);
        favorites.toggle(7);
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_membership_is_orderless() {
        let mut a = FavoritesSet::new();
        a.toggle(1);
        a.toggle(2);

        let mut b = FavoritesSet::new();
        b.toggle(2);
        b.toggle(1);

        assert_eq!(a, b);
    }
}

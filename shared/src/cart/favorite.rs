//! Favorite Reconciler
//!
//! Favorites are matched by food name, not id; two distinct foods sharing a
//! name are treated as the same favorite.

use crate::models::{FavoriteEntry, FoodItem};

/// Anything listed as a favorite
pub trait Named {
    fn name(&self) -> Option<&str>;
}

impl Named for FoodItem {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Named for FavoriteEntry {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Whether any favorite carries the given food name
pub fn reconcile<T: Named>(food_name: &str, favorites: &[T]) -> bool {
    favorites
        .iter()
        .any(|favorite| favorite.name() == Some(food_name))
}

/// Request a favorite toggle has to issue before the flag may flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    /// `POST /favorites` with the full food record
    Add,
    /// `DELETE /favorites/{food_id}`
    Remove,
}

impl FavoriteAction {
    pub fn for_status(is_favorite: bool) -> Self {
        if is_favorite { Self::Remove } else { Self::Add }
    }

    /// Favorite flag once the request has completed
    pub fn resulting_status(self) -> bool {
        matches!(self, Self::Add)
    }
}

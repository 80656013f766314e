//! Data models shared with the food API

pub mod favorite;
pub mod food;
pub mod order;

pub use favorite::FavoriteEntry;
pub use food::{ExtraDefinition, ExtraState, FoodItem};
pub use order::OrderRecord;

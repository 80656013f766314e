//! Shared types for the food ordering client
//!
//! Wire models for the food API, currency formatting, and the cart state
//! behind the food details screen.

pub mod cart;
pub mod models;
pub mod money;

// Re-exports
pub use cart::{CartError, CartResult, ExtraLedger, FoodDetailsState, OrderQuantity};
pub use models::{ExtraDefinition, ExtraState, FavoriteEntry, FoodItem, OrderRecord};
pub use money::CurrencyFormat;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

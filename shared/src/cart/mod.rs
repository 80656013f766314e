//! Cart state for the food details screen
//!
//! Every component here is a value: mutations return a new snapshot and
//! derived values (favorite flag, totals, the order record) are computed from
//! the current snapshot on demand.

pub mod assembler;
pub mod favorite;
pub mod ledger;
pub mod pricing;
pub mod quantity;
pub mod state;

pub use assembler::{assemble, next_order_id};
pub use favorite::{FavoriteAction, Named, reconcile};
pub use ledger::ExtraLedger;
pub use pricing::{cart_total, cart_total_amount, unit_price};
pub use quantity::OrderQuantity;
pub use state::FoodDetailsState;

use thiserror::Error;

/// Cart errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Mutation referenced an extra the current food item does not offer
    #[error("unknown extra: {0}")]
    UnknownExtra(i64),

    /// Order quantity below the minimum of 1
    #[error("invalid order quantity: {0}")]
    InvalidQuantity(u32),

    /// Food item breaks a model invariant
    #[error("invalid food item: {0}")]
    InvalidFood(String),
}

pub type CartResult<T> = Result<T, CartError>;

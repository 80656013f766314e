//! Order Quantity Counter

use super::CartError;
use serde::{Deserialize, Serialize};

/// How many of the food item are being ordered; never below 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct OrderQuantity(u32);

impl OrderQuantity {
    pub const MIN: OrderQuantity = OrderQuantity(1);

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One less, floored at 1
    pub fn decremented(self) -> Self {
        if self.0 > 1 { Self(self.0 - 1) } else { self }
    }
}

impl Default for OrderQuantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u32> for OrderQuantity {
    type Error = CartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(CartError::InvalidQuantity(value));
        }
        Ok(Self(value))
    }
}

impl From<OrderQuantity> for u32 {
    fn from(q: OrderQuantity) -> Self {
        q.0
    }
}

impl std::fmt::Display for OrderQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

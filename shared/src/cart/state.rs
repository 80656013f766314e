//! Food details screen state
//!
//! One explicitly owned snapshot of everything the screen derives from:
//! the loaded food, the extra ledger, the order quantity and the favorite
//! flag. Each transition consumes the snapshot and returns the next one.

use super::favorite::Named;
use super::{CartResult, ExtraLedger, OrderQuantity, assembler, favorite, pricing};
use crate::models::{FoodItem, OrderRecord};
use crate::money::CurrencyFormat;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct FoodDetailsState {
    food: FoodItem,
    extras: ExtraLedger,
    quantity: OrderQuantity,
    is_favorite: bool,
}

impl FoodDetailsState {
    /// State for a freshly loaded food item.
    ///
    /// Extras start at 0, quantity at 1, and the favorite flag is reconciled
    /// against `favorites`.
    pub fn load<T: Named>(
        food: FoodItem,
        favorites: &[T],
        currency: &CurrencyFormat,
    ) -> CartResult<Self> {
        food.validate()?;

        let formatted = pricing::unit_price(&food, currency);
        let food = food.with_formatted_price(formatted);
        let extras = ExtraLedger::initialize(&food.extras);
        let is_favorite = favorite::reconcile(&food.name, favorites);

        tracing::debug!(
            food_id = food.id,
            extras = extras.len(),
            is_favorite,
            "Food details state loaded"
        );

        Ok(Self {
            food,
            extras,
            quantity: OrderQuantity::default(),
            is_favorite,
        })
    }

    pub fn food(&self) -> &FoodItem {
        &self.food
    }

    pub fn extras(&self) -> &ExtraLedger {
        &self.extras
    }

    pub fn quantity(&self) -> OrderQuantity {
        self.quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Recompute the favorite flag from a fresh favorites list
    pub fn reconciled<T: Named>(self, favorites: &[T]) -> Self {
        let is_favorite = favorite::reconcile(&self.food.name, favorites);
        Self { is_favorite, ..self }
    }

    pub fn with_favorite(self, is_favorite: bool) -> Self {
        Self { is_favorite, ..self }
    }

    pub fn increment_extra(self, id: i64) -> Self {
        let extras = self.extras.incremented(id);
        Self { extras, ..self }
    }

    pub fn decrement_extra(self, id: i64) -> Self {
        let extras = self.extras.decremented(id);
        Self { extras, ..self }
    }

    pub fn increment_quantity(self) -> Self {
        let quantity = self.quantity.incremented();
        Self { quantity, ..self }
    }

    pub fn decrement_quantity(self) -> Self {
        let quantity = self.quantity.decremented();
        Self { quantity, ..self }
    }

    pub fn unit_price(&self, currency: &CurrencyFormat) -> String {
        pricing::unit_price(&self.food, currency)
    }

    pub fn cart_total_amount(&self) -> Decimal {
        pricing::cart_total_amount(&self.food, &self.extras, self.quantity)
    }

    pub fn cart_total(&self, currency: &CurrencyFormat) -> String {
        pricing::cart_total(&self.food, &self.extras, self.quantity, currency)
    }

    /// Order record for the current snapshot under the given order id
    pub fn order(&self, order_id: i64, currency: &CurrencyFormat) -> OrderRecord {
        assembler::assemble(
            order_id,
            &self.food,
            &self.extras,
            self.quantity,
            self.cart_total(currency),
        )
    }
}

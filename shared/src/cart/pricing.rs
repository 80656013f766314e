//! Pricing Calculator
//!
//! Totals are recomputed from the current snapshot on every call; nothing is
//! cached between calls.
//!
//! ```text
//! total = (Σ extra.quantity * extra.value + food.price) * order_quantity
//! ```

use super::{ExtraLedger, OrderQuantity};
use crate::models::FoodItem;
use crate::money::{CurrencyFormat, round_money};
use rust_decimal::Decimal;

/// Formatted unit price of the food item
pub fn unit_price(food: &FoodItem, currency: &CurrencyFormat) -> String {
    currency.format(food.price)
}

/// Unformatted cart total, rounded to the cent
pub fn cart_total_amount(
    food: &FoodItem,
    extras: &ExtraLedger,
    quantity: OrderQuantity,
) -> Decimal {
    let per_unit = extras.extras_total() + food.price;
    round_money(per_unit * Decimal::from(quantity.get()))
}

/// Formatted cart total
pub fn cart_total(
    food: &FoodItem,
    extras: &ExtraLedger,
    quantity: OrderQuantity,
    currency: &CurrencyFormat,
) -> String {
    currency.format(cart_total_amount(food, extras, quantity))
}

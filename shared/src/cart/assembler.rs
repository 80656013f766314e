//! Order Assembler

use super::{ExtraLedger, OrderQuantity};
use crate::models::{FoodItem, OrderRecord};

/// Id for the next order given how many orders exist.
///
/// Not safe against concurrent submissions from other sessions; two clients
/// that list the same count will post the same id.
pub fn next_order_id(existing_orders: usize) -> i64 {
    existing_orders as i64 + 1
}

/// Build the order record from the current snapshot
pub fn assemble(
    order_id: i64,
    food: &FoodItem,
    extras: &ExtraLedger,
    quantity: OrderQuantity,
    formatted_total: impl Into<String>,
) -> OrderRecord {
    OrderRecord {
        id: order_id,
        product_id: food.id,
        name: food.name.clone(),
        description: food.description.clone(),
        price: food.price,
        image_url: food.image_url.clone(),
        formatted_price: food.formatted_price.clone(),
        quantity: quantity.get(),
        formatted_value: formatted_total.into(),
        extras: extras.extras().to_vec(),
        other: food.other.clone(),
    }
}

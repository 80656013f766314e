//! Order Model

use super::food::ExtraState;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Order as posted to and listed from `/orders`
///
/// Carries every field of the ordered food item; `id` is the order's own
/// sequential id and the food's id moves to `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    #[serde(
        rename = "formattedPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_price: Option<String>,
    pub quantity: u32,
    /// Formatted cart total at submission time
    #[serde(rename = "formattedValue")]
    pub formatted_value: String,
    #[serde(default)]
    pub extras: Vec<ExtraState>,
    /// Unmodelled food fields carried into the order
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

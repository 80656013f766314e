//! Food Model

use crate::cart::{CartError, CartResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Food item as served by `GET /foods/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Unit price, non-negative
    pub price: Decimal,
    pub image_url: String,
    /// Optional extras, in the order the API returned them
    #[serde(default)]
    pub extras: Vec<ExtraDefinition>,
    /// Display price attached after load (derived, never read back)
    #[serde(
        rename = "formattedPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_price: Option<String>,
    /// Fields this client does not model (e.g. `category`), sent back as received
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl FoodItem {
    /// Check the invariants the cart relies on.
    pub fn validate(&self) -> CartResult<()> {
        if self.price < Decimal::ZERO {
            return Err(CartError::InvalidFood(format!(
                "price must be non-negative, got {}",
                self.price
            )));
        }

        for (idx, extra) in self.extras.iter().enumerate() {
            if extra.value < Decimal::ZERO {
                return Err(CartError::InvalidFood(format!(
                    "extra {} value must be non-negative, got {}",
                    extra.id, extra.value
                )));
            }
            if self.extras[..idx].iter().any(|e| e.id == extra.id) {
                return Err(CartError::InvalidFood(format!(
                    "duplicate extra id {}",
                    extra.id
                )));
            }
        }

        Ok(())
    }

    /// Copy of this item carrying its display price
    pub fn with_formatted_price(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_price = Some(formatted.into());
        self
    }
}

/// Extra ingredient offered with a food item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraDefinition {
    /// Unique within one food item
    pub id: i64,
    pub name: String,
    /// Price per unit of the extra
    pub value: Decimal,
}

/// Extra with the quantity the user picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraState {
    pub id: i64,
    pub name: String,
    pub value: Decimal,
    #[serde(default)]
    pub quantity: u32,
}

impl ExtraState {
    /// Price of all units of this extra
    pub fn subtotal(&self) -> Decimal {
        self.value * Decimal::from(self.quantity)
    }
}

impl From<&ExtraDefinition> for ExtraState {
    fn from(def: &ExtraDefinition) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            value: def.value,
            quantity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn food(price: Decimal, extras: Vec<ExtraDefinition>) -> FoodItem {
        FoodItem {
            id: 1,
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price,
            image_url: "https://example.com/ao_molho.png".to_string(),
            extras,
            formatted_price: None,
            other: Default::default(),
        }
    }

    fn extra(id: i64, value: Decimal) -> ExtraDefinition {
        ExtraDefinition {
            id,
            name: format!("extra-{id}"),
            value,
        }
    }

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": 1,
            "name": "Ao molho",
            "description": "Macarrão ao molho branco",
            "price": 19.9,
            "image_url": "https://example.com/ao_molho.png",
            "extras": [{ "id": 1, "name": "Bacon", "value": 1.5 }]
        }"#;

        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, dec!(19.9));
        assert_eq!(item.extras.len(), 1);
        assert_eq!(item.extras[0].value, dec!(1.5));
        assert!(item.formatted_price.is_none());
    }

    #[test]
    fn test_formatted_price_uses_camel_case_key() {
        let item = food(dec!(10), vec![]).with_formatted_price("R$ 10,00");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["formattedPrice"], "R$ 10,00");

        let bare = serde_json::to_value(food(dec!(10), vec![])).unwrap();
        assert!(bare.get("formattedPrice").is_none());
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let json = r#"{
            "id": 2,
            "name": "Veggie",
            "description": "Macarrão com pimentão",
            "price": 21,
            "image_url": "https://example.com/veggie.png",
            "thumbnail_url": "https://example.com/veggie-thumb.png",
            "category": 1,
            "extras": []
        }"#;

        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, dec!(21));
        assert_eq!(item.other["category"], 1);
        assert!(!item.other.contains_key("name"));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["thumbnail_url"], "https://example.com/veggie-thumb.png");
        assert_eq!(value["category"], 1);
    }

    #[test]
    fn test_extra_state_quantity_defaults_to_zero() {
        let state: ExtraState =
            serde_json::from_str(r#"{ "id": 3, "name": "Ovo", "value": 2 }"#).unwrap();
        assert_eq!(state.quantity, 0);
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let err = food(dec!(-1), vec![]).validate().unwrap_err();
        assert!(matches!(err, CartError::InvalidFood(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_extra_ids() {
        let item = food(dec!(5), vec![extra(1, dec!(1)), extra(1, dec!(2))]);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_free_food() {
        let item = food(dec!(0), vec![extra(1, dec!(0)), extra(2, dec!(3.5))]);
        assert!(item.validate().is_ok());
    }
}

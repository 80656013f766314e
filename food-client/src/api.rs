//! Typed food API
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | Get food by id | GET | `/foods/{id}` |
//! | List favorites | GET | `/favorites` |
//! | Add favorite | POST | `/favorites` |
//! | Remove favorite | DELETE | `/favorites/{id}` |
//! | List orders | GET | `/orders` |
//! | Create order | POST | `/orders` |

use crate::ClientResult;
use crate::http::HttpClient;
use shared::{FavoriteEntry, FoodItem, OrderRecord};

/// Food API over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct FoodApi<H> {
    http: H,
}

impl<H: HttpClient> FoodApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub async fn get_food(&self, id: i64) -> ClientResult<FoodItem> {
        self.http.get(&format!("foods/{id}")).await
    }

    pub async fn list_favorites(&self) -> ClientResult<Vec<FavoriteEntry>> {
        self.http.get("favorites").await
    }

    pub async fn add_favorite(&self, food: &FoodItem) -> ClientResult<()> {
        self.http.post("favorites", food).await
    }

    pub async fn remove_favorite(&self, food_id: i64) -> ClientResult<()> {
        self.http.delete(&format!("favorites/{food_id}")).await
    }

    /// Number of existing orders, whatever their shape
    pub async fn count_orders(&self) -> ClientResult<usize> {
        let orders: Vec<serde::de::IgnoredAny> = self.http.get("orders").await?;
        Ok(orders.len())
    }

    pub async fn create_order(&self, order: &OrderRecord) -> ClientResult<()> {
        self.http.post("orders", order).await
    }
}

//! Food details session
//!
//! Drives one [`FoodDetailsState`] through the remote round trips of the food
//! details screen: loading an item, toggling its favorite flag and submitting
//! the order.

use crate::api::FoodApi;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientResult};
use shared::cart::{FavoriteAction, FoodDetailsState, next_order_id};
use shared::{CurrencyFormat, OrderRecord};

pub struct FoodDetailsSession<H> {
    api: FoodApi<H>,
    currency: CurrencyFormat,
    state: FoodDetailsState,
}

impl<H: HttpClient> FoodDetailsSession<H> {
    /// Fetch a food item and the favorites list, then seed the cart state.
    pub async fn load(
        api: FoodApi<H>,
        food_id: i64,
        currency: CurrencyFormat,
    ) -> ClientResult<Self> {
        let state = Self::fetch_state(&api, food_id, &currency).await?;
        Ok(Self {
            api,
            currency,
            state,
        })
    }

    /// Switch to another food item; extras and quantity start over.
    ///
    /// On failure the current state is kept.
    pub async fn reload(&mut self, food_id: i64) -> ClientResult<()> {
        self.state = Self::fetch_state(&self.api, food_id, &self.currency).await?;
        Ok(())
    }

    async fn fetch_state(
        api: &FoodApi<H>,
        food_id: i64,
        currency: &CurrencyFormat,
    ) -> ClientResult<FoodDetailsState> {
        let food = api.get_food(food_id).await.inspect_err(|e| {
            tracing::warn!(food_id, error = %e, "Failed to load food");
        })?;
        let favorites = api.list_favorites().await?;
        let state = FoodDetailsState::load(food, &favorites, currency)?;
        tracing::info!(
            food_id,
            name = %state.food().name,
            is_favorite = state.is_favorite(),
            "Food loaded"
        );
        Ok(state)
    }

    pub fn state(&self) -> &FoodDetailsState {
        &self.state
    }

    pub fn api(&self) -> &FoodApi<H> {
        &self.api
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    pub fn is_favorite(&self) -> bool {
        self.state.is_favorite()
    }

    /// Re-fetch favorites and recompute the flag
    pub async fn refresh_favorite(&mut self) -> ClientResult<bool> {
        let favorites = self.api.list_favorites().await?;
        self.transition(|s| s.reconciled(&favorites));
        Ok(self.state.is_favorite())
    }

    pub fn increment_extra(&mut self, extra_id: i64) {
        self.transition(|s| s.increment_extra(extra_id));
    }

    pub fn decrement_extra(&mut self, extra_id: i64) {
        self.transition(|s| s.decrement_extra(extra_id));
    }

    pub fn increment_quantity(&mut self) {
        self.transition(FoodDetailsState::increment_quantity);
    }

    pub fn decrement_quantity(&mut self) {
        self.transition(FoodDetailsState::decrement_quantity);
    }

    pub fn unit_price(&self) -> String {
        self.state.unit_price(&self.currency)
    }

    pub fn cart_total(&self) -> String {
        self.state.cart_total(&self.currency)
    }

    /// Add or remove the food from favorites, then flip the flag.
    ///
    /// The flag only changes once the request has succeeded; a failed request
    /// leaves it as it was.
    pub async fn toggle_favorite(&mut self) -> ClientResult<bool> {
        let action = FavoriteAction::for_status(self.state.is_favorite());
        let food_id = self.state.food().id;

        match action {
            FavoriteAction::Add => {
                self.api.add_favorite(self.state.food()).await?;
            }
            FavoriteAction::Remove => {
                self.api.remove_favorite(food_id).await?;
            }
        }

        let is_favorite = action.resulting_status();
        self.transition(|s| s.with_favorite(is_favorite));
        tracing::info!(food_id, is_favorite, "Favorite toggled");
        Ok(is_favorite)
    }

    /// Submit the current cart as an order and return the record sent.
    ///
    /// The order id is the current order count plus one. Listing and creating
    /// are two separate requests with nothing tying them together.
    pub async fn finish_order(&self) -> ClientResult<OrderRecord> {
        let count = self.api.count_orders().await?;
        let order = self.state.order(next_order_id(count), &self.currency);

        self.api.create_order(&order).await.inspect_err(|e| {
            tracing::warn!(order_id = order.id, error = %e, "Failed to create order");
        })?;

        tracing::info!(
            order_id = order.id,
            product_id = order.product_id,
            quantity = order.quantity,
            total = %order.formatted_value,
            "Order created"
        );
        Ok(order)
    }

    fn transition(&mut self, f: impl FnOnce(FoodDetailsState) -> FoodDetailsState) {
        self.state = f(self.state.clone());
    }
}

impl FoodDetailsSession<NetworkHttpClient> {
    /// Load a food item over the network using `config` for transport and currency
    pub async fn connect(config: &ClientConfig, food_id: i64) -> ClientResult<Self> {
        let api = FoodApi::new(config.build_http_client()?);
        Self::load(api, food_id, config.currency.clone()).await
    }
}

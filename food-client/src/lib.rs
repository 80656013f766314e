//! Food Client - HTTP client for the food API
//!
//! Provides the typed food API and the session that runs the food details
//! screen against it.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use api::FoodApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::FoodDetailsSession;

// Re-export shared types for convenience
pub use shared::{CurrencyFormat, ExtraState, FoodDetailsState, FoodItem, OrderRecord};

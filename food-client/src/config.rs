//! Client configuration

use crate::error::{ClientError, ClientResult};
use crate::http::NetworkHttpClient;
use shared::CurrencyFormat;

/// Default API location (the json-server the app ships against)
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the food API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:3333")
    pub base_url: String,

    /// Bearer token, sent when present
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Currency used for every formatted price
    pub currency: CurrencyFormat,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            currency: CurrencyFormat::default(),
        }
    }

    /// Load configuration from the environment (and `.env` if present).
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `FOOD_API_URL` | `http://localhost:3333` |
    /// | `FOOD_API_TOKEN` | none |
    /// | `FOOD_API_TIMEOUT` | `30` |
    /// | `FOOD_API_CURRENCY` | `BRL` |
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("FOOD_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut config = Self::new(base_url);

        if let Some(token) = get("FOOD_API_TOKEN") {
            config = config.with_token(token);
        }

        if let Some(timeout) = get("FOOD_API_TIMEOUT") {
            let seconds = timeout.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!(
                    "FOOD_API_TIMEOUT must be whole seconds, got {timeout}"
                ))
            })?;
            config = config.with_timeout(seconds);
        }

        if let Some(code) = get("FOOD_API_CURRENCY") {
            let currency = code
                .parse::<CurrencyFormat>()
                .map_err(|e| ClientError::Config(e.to_string()))?;
            config = config.with_currency(currency);
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the display currency
    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

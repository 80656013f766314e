//! Favorite Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry of `GET /favorites`.
///
/// Only the name takes part in reconciling; every other field is kept
/// as received so a malformed favorite cannot break loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl FavoriteEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            other: Map::new(),
        }
    }
}

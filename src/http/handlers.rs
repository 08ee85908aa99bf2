//! Route handlers.
//!
//! Both handlers are stateless apart from the shared greeter. Parameter
//! validation happens in extraction, before handler logic runs.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::params::Integer;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::LOG_TARGET;

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingMessage {
    pub message: String,
}

/// Query string of `GET /items/{item_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemParams {
    pub q: Option<String>,
}

impl ItemParams {
    /// Pick `q` out of raw query pairs. A repeated key keeps its last value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .filter(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .last();
        Self { q }
    }
}

/// Body of `GET /items/{item_id}`; echoes the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    pub item_id: Integer,
    pub q: Option<String>,
}

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Json<GreetingMessage> {
    tracing::info!(target: LOG_TARGET, "The root endpoint was called.");

    Json(GreetingMessage {
        message: state.greeter.greet(),
    })
}

/// `GET /items/{item_id}?q=...`
pub async fn read_item(
    item_id: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ItemQuery>, ApiError> {
    let Path(raw) = item_id.map_err(|e| ApiError::from_path_rejection("item_id", e))?;
    let item_id = raw.parse::<Integer>().map_err(|e| ApiError::InvalidPath {
        name: "item_id",
        message: e.to_string(),
    })?;
    let Query(pairs) = query?;

    Ok(Json(ItemQuery {
        item_id,
        q: ItemParams::from_pairs(pairs).q,
    }))
}

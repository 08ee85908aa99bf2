//! Error responses.
//!
//! Every rejection the service produces is a JSON object with a `detail`
//! field. Parameter validation failures list each offending field with its
//! location (`["path", "item_id"]`, `["query"]`), a message and a kind.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid path parameter `{name}`: {message}")]
    InvalidPath { name: &'static str, message: String },

    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a path extraction failure for the parameter `name`.
    pub fn from_path_rejection(name: &'static str, rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => Self::InvalidPath {
                name,
                message: e.body_text(),
            },
            other => Self::Internal(other.body_text()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath { .. } | Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        let detail = match self {
            Self::InvalidPath { name, message } => Detail::Fields(vec![FieldError {
                loc: vec!["path".to_string(), (*name).to_string()],
                msg: message.clone(),
                kind: "int_parsing",
            }]),
            Self::InvalidQuery(message) => Detail::Fields(vec![FieldError {
                loc: vec!["query".to_string()],
                msg: message.clone(),
                kind: "query_parsing",
            }]),
            Self::NotFound => Detail::Message("Not Found"),
            Self::MethodNotAllowed => Detail::Message("Method Not Allowed"),
            Self::Internal(_) => Detail::Message("Internal Server Error"),
        };
        ErrorBody { detail }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Detail {
    Message(&'static str),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Serialize)]
struct FieldError {
    loc: Vec<String>,
    msg: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Router fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Router fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

//! HTTP endpoint layer.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → handlers.rs (GET / and GET /items/{item_id})
//!     → params.rs (lenient integer path parameter)
//!     → response.rs (JSON error bodies for rejections)
//!     → Send to client
//! ```

pub mod handlers;
pub mod params;
pub mod request;
pub mod response;
pub mod server;

pub use handlers::{GreetingMessage, ItemParams, ItemQuery};
pub use params::Integer;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};

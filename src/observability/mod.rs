//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → tracing events on the `greet_api` target
//!     → request spans from tower-http's TraceLayer
//!
//! Consumers:
//!     → stdout, pretty or JSON per config
//! ```

pub mod logging;

pub use logging::{init_logging, LOG_TARGET};

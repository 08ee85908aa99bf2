//! Greeting HTTP service library.

pub mod config;
pub mod greeting;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use greeting::Greeter;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

//! Greeting provider.
//!
//! # Responsibilities
//! - Supply the message returned by the root endpoint
//! - Stay free of request data: a greeter takes no input
//!
//! A fresh message is produced on every call. Nothing is cached between
//! requests.

use std::sync::Arc;

use crate::config::GreetingConfig;

/// The text returned when no greeting is configured.
pub const DEFAULT_GREETING: &str = "Hello World";

/// Something that can produce a greeting.
pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

/// Greets with the literal `"Hello World"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorld;

impl Greeter for HelloWorld {
    fn greet(&self) -> String {
        DEFAULT_GREETING.to_string()
    }
}

/// Greets with a fixed message chosen at startup.
#[derive(Debug, Clone)]
pub struct StaticGreeting {
    message: String,
}

impl StaticGreeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Greeter for StaticGreeting {
    fn greet(&self) -> String {
        self.message.clone()
    }
}

/// Build the greeter described by the configuration.
pub fn from_config(config: &GreetingConfig) -> Arc<dyn Greeter> {
    match &config.message {
        Some(message) => Arc::new(StaticGreeting::new(message.clone())),
        None => Arc::new(HelloWorld),
    }
}

//! greet-api
//!
//! A small JSON service built with Tokio and Axum.
//!
//! # Routes
//!
//! ```text
//! GET /                   → {"message": "<greeting>"}
//! GET /items/{item_id}    → {"item_id": <int>, "q": <string|null>}
//! ```
//!
//! # Startup
//!
//! ```text
//! CLI args → config file (optional) → overrides → validate
//!     → logging → bind → serve until SIGINT/SIGTERM
//! ```

use std::path::PathBuf;

use clap::Parser;

use greet_api::config::{self, ServiceConfig};
use greet_api::greeting;
use greet_api::lifecycle::{self, Shutdown};
use greet_api::observability;
use greet_api::HttpServer;

#[derive(Parser)]
#[command(name = "greet-api")]
#[command(about = "Serve the greeting and item endpoints", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `observability.log_level`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ServiceConfig, config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }

        config::validate_config(&config).map_err(config::ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    observability::init_logging(&config.observability)?;

    tracing::info!("greet-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = lifecycle::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            lifecycle::wait_for_signal().await;
            shutdown.trigger();
        }
    });

    let greeter = greeting::from_config(&config.greeting);
    let server = HttpServer::new(config, greeter);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers and fallbacks
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::greeting::Greeter;
use crate::http::handlers::{read_item, root};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::{method_not_allowed, not_found};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub greeter: Arc<dyn Greeter>,
}

impl AppState {
    pub fn new(greeter: Arc<dyn Greeter>) -> Self {
        Self { greeter }
    }
}

/// HTTP server for the greeting service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and greeter.
    pub fn new(config: ServiceConfig, greeter: Arc<dyn Greeter>) -> Self {
        let router = Self::build_router(&config, AppState::new(greeter));
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(root))
            .route("/items/{item_id}", get(read_item))
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .with_state(state);

        with_middleware(routes, config)
    }

    /// The fully layered router, for serving or in-process calls.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wrap `router` in the service middleware.
///
/// The request id is set and propagated outside the timeout so that
/// timeout responses carry it too.
#[allow(deprecated)]
fn with_middleware(router: Router, config: &ServiceConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(set_request_id_layer())
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                request_id = request.request_id().unwrap_or("unknown"),
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )));

    router.layer(middleware)
}

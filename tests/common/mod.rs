//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use greet_api::config::ServiceConfig;
use greet_api::greeting::{Greeter, HelloWorld};
use greet_api::{HttpServer, Shutdown};

/// A running server bound to an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with the default greeter.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(HelloWorld)).await
}

/// Start the service with a custom greeter.
pub async fn spawn_app_with(greeter: Arc<dyn Greeter>) -> TestApp {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();

    let listener = greet_api::lifecycle::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, greeter);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    TestApp {
        addr,
        client,
        shutdown,
    }
}

/// Greeter that counts how often it was asked.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingGreeter {
    pub calls: AtomicUsize,
}

impl Greeter for CountingGreeter {
    fn greet(&self) -> String {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        format!("Hello #{n}")
    }
}

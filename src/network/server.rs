//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::Config;
use crate::error::{DocError, Result};
use crate::handler::Handler;

use super::router;

/// HTTP server for docstore
pub struct Server {
    config: Config,
    handler: Handler,
    shutdown: Arc<Notify>,
}

impl Server {
    /// Create a new server with the given config and handler
    pub fn new(config: Config, handler: Handler) -> Self {
        Self {
            config,
            handler,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Start the server (blocking)
    ///
    /// Builds a multi-threaded tokio runtime and serves until Ctrl+C or
    /// [`Server::shutdown`].
    pub fn run(&mut self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(self.serve())
    }

    /// Bind the configured address and serve
    pub async fn serve(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr)
            .await
            .map_err(|e| {
                DocError::Network(format!("failed to bind {}: {}", self.config.listen_addr, e))
            })?;

        self.serve_on(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve_on(&self, listener: TcpListener) -> Result<()> {
        match listener.local_addr() {
            Ok(addr) => tracing::info!("Listening on http://{}", addr),
            Err(e) => tracing::warn!("Listening on unknown address: {}", e),
        }

        let app = router(self.handler.clone(), &self.config);
        let shutdown = Arc::clone(&self.shutdown);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await
            .map_err(|e| DocError::Network(e.to_string()))?;

        tracing::info!("Server stopped accepting connections");
        Ok(())
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

async fn shutdown_signal(shutdown: Arc<Notify>) {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, initiating shutdown...");
        } else {
            // No signal handler available; rely on explicit shutdown
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = shutdown.notified() => {
            tracing::info!("Shutdown requested");
        }
        _ = ctrl_c => {}
    }
}

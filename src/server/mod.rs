//! HTTP surface of the inventory service, built on `axum`.
//!
//! ## Example
//! ```no_run
//! use storehouse::server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder().port(5000).build().run().await
//! }
//! ```

mod handlers;
mod health;
mod page;
pub mod router;
mod state;

pub use state::AppState;

use anyhow::{Context, Result};
use std::net::IpAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::config::ServerConfig;
use crate::UnitsStore;

/// A fluent builder for configuring the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ServerConfig,
    store: Option<UnitsStore>,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: ServerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn address(mut self, address: IpAddr) -> Self {
        self.cfg.address = address;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.port = port;
        self
    }

    /// Starts the server with a pre-populated registry instead of an empty one.
    pub fn store(mut self, store: UnitsStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Server {
        let state = AppState::new(self.store.unwrap_or_default());
        Server {
            cfg: self.cfg,
            state,
        }
    }
}

/// A configured server ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    cfg: ServerConfig,
    state: AppState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Returns a handle to the shared state, e.g. for inspection in tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Binds the listener and serves requests until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn run(self) -> Result<()> {
        let address = self.cfg.socket_addr();
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        health::mark_started();
        info!("Starting HTTP server on http://{address}");

        axum::serve(listener, router::init(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

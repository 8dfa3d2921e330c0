// SPDX-License-Identifier: MIT

//! User-Registry API Server
//!
//! Accepts JSON user records on `POST /api/users` and persists them to the
//! PostgreSQL `users` table.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_registry::{config::Config, db::Database, AppState};

/// The service listens on a fixed port; there are no CLI flags.
const LISTEN_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    // Build the shared connection pool. Physical connections are opened on
    // first use, so the server comes up even while the store is unreachable.
    let db = Database::new(&config);
    tracing::info!(
        host = %config.db_host,
        database = %config.db_name,
        max_connections = config.db_max_connections,
        "Database pool initialized"
    );

    let state = Arc::new(AppState { config, db });

    // Build router
    let app = user_registry::routes::create_router(state);

    // Start server
    let listener = match tokio::net::TcpListener::bind(LISTEN_ADDR).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, address = LISTEN_ADDR, "Failed to bind listen address");
            return Err(err.into());
        }
    };
    tracing::info!(address = LISTEN_ADDR, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize tracing with an env-filter (`RUST_LOG` overrides the defaults).
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("user_registry=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// SPDX-License-Identifier: MIT

use std::sync::Arc;
use user_registry::config::Config;
use user_registry::db::Database;
use user_registry::routes::create_router;
use user_registry::AppState;

/// Check if a live PostgreSQL target is configured via environment variables.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("DB_USER").is_ok()
        && std::env::var("DB_PASSWORD").is_ok()
        && std::env::var("DB_NAME").is_ok()
}

/// Skip test with message if no live database is configured.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("⚠️  Skipping: DB_USER/DB_PASSWORD/DB_NAME not set");
            return;
        }
    };
}

/// Create an offline database handle (checkouts always fail).
#[allow(dead_code)]
pub fn test_db_offline() -> Database {
    Database::disconnected()
}

/// Create a test app with an offline database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let state = Arc::new(AppState {
        config,
        db: test_db_offline(),
    });
    (create_router(state.clone()), state)
}

/// Create a test app backed by the database configured in the environment.
#[allow(dead_code)]
pub fn create_live_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::from_env().expect("database environment must be configured");
    let db = Database::new(&config);
    let state = Arc::new(AppState { config, db });
    (create_router(state.clone()), state)
}

/// Open a direct pool to the configured database for test fixtures.
#[allow(dead_code)]
pub async fn live_pool() -> sqlx::PgPool {
    let config = Config::from_env().expect("database environment must be configured");
    let options = sqlx::postgres::PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .ssl_mode(sqlx::postgres::PgSslMode::Disable);
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .expect("failed to connect to test database")
}

/// Make sure the `users` table the service expects exists.
#[allow(dead_code)]
pub async fn ensure_users_table(pool: &sqlx::PgPool) {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
             id           BIGSERIAL PRIMARY KEY,
             first_name   TEXT NOT NULL,
             last_name    TEXT NOT NULL,
             email        TEXT NOT NULL,
             phone_number TEXT NOT NULL,
             dob          DATE NOT NULL,
             address      TEXT NOT NULL
         )",
    )
    .execute(pool)
    .await
    .expect("failed to create users table");
}

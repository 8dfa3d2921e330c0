// SPDX-License-Identifier: MIT

//! PostgreSQL gateway for the `users` table.
//!
//! Holds the process-wide connection pool. Physical connections are opened
//! lazily on checkout, so the server starts even while the store is down,
//! and every checkout runs a liveness ping before any query. The `users`
//! table itself is owned by the deployer, not this service:
//!
//! ```sql
//! CREATE TABLE users (
//!     id           BIGSERIAL PRIMARY KEY,
//!     first_name   TEXT NOT NULL,
//!     last_name    TEXT NOT NULL,
//!     email        TEXT NOT NULL,
//!     phone_number TEXT NOT NULL,
//!     dob          DATE NOT NULL,
//!     address      TEXT NOT NULL
//! );
//! ```

use crate::config::Config;
use crate::error::AppError;
use crate::models::NewUser;
use chrono::NaiveDate;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use sqlx::{Connection, Postgres};
use std::time::Duration;

/// How long a request waits for a pooled connection before giving up.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// PostgreSQL database handle wrapping the shared connection pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build the shared pool from configuration.
    ///
    /// Transport encryption to the store is always disabled, matching the
    /// deployment contract. No physical connection is opened here.
    pub fn new(config: &Config) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name)
            .ssl_mode(PgSslMode::Disable);

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Create a handle whose checkouts always fail, for tests that exercise
    /// the store-unreachable paths (offline mode).
    pub fn disconnected() -> Self {
        // Nothing listens on port 0, so the first acquire fails immediately.
        let options = PgConnectOptions::new()
            .host("127.0.0.1")
            .port(0)
            .username("nobody")
            .database("nothing")
            .ssl_mode(PgSslMode::Disable);

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Check out a live connection for the duration of one request.
    ///
    /// Acquiring from the pool and the liveness ping that follows both happen
    /// before any query; either failing is a connection error. Dropping the
    /// returned guard releases the connection on every exit path.
    pub async fn connect(&self) -> Result<DbConn, AppError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(AppError::DatabaseConnection)?;
        conn.ping().await.map_err(AppError::DatabaseConnection)?;
        Ok(DbConn(conn))
    }
}

/// A pooled connection scoped to a single request.
pub struct DbConn(PoolConnection<Postgres>);

impl DbConn {
    /// Insert one user record and return the store-generated identifier.
    ///
    /// All six fields are bound as positional parameters, never interpolated
    /// into the statement; the date of birth is bound as a typed date.
    pub async fn insert_user(&mut self, user: &NewUser, dob: NaiveDate) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (first_name, last_name, email, phone_number, dob, address)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(dob)
        .bind(&user.address)
        .fetch_one(&mut *self.0)
        .await
        .map_err(AppError::Query)?;

        Ok(id)
    }
}

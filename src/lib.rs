// SPDX-License-Identifier: MIT

//! User-Registry: intake API for user records
//!
//! This crate provides the backend API that accepts JSON user records over
//! HTTP and persists them to the PostgreSQL `users` table.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::Database;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
}

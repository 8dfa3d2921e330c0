// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod users;

use crate::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the complete router with all routes.
///
/// Unmatched paths and methods fall through to axum's defaults (404 and 405).
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(users::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

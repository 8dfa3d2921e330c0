// SPDX-License-Identifier: MIT

//! User intake route.

use crate::error::{AppError, Result};
use crate::models::{CreatedUser, NewUser};
use crate::time_utils;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

/// User intake routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", post(create_user))
}

/// Create a user record: decode, validate, insert, respond 201.
///
/// Each request performs at most one insert; every failure is terminal and
/// the caller must resubmit. The pooled connection checked out for the
/// insert is released when the handler returns, on success and error alike.
async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedUser>)> {
    // Any body rejection collapses into the same generic client error.
    let Json(user) = payload.map_err(|_| AppError::InvalidInput)?;

    // The date check keeps its dedicated message; field rules run after it.
    let dob = time_utils::parse_dob(&user.dob).ok_or(AppError::InvalidDateOfBirth)?;
    user.validate()?;

    let mut conn = state.db.connect().await?;
    let id = conn.insert_user(&user, dob).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUser {
            id,
            full_name: user.full_name(),
            email: user.email,
        }),
    ))
}

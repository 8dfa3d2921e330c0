// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.
//!
//! Client-caused failures (bad body, bad date, field violations) map to 400
//! with fixed, non-sensitive bodies. Store-caused failures map to 500; the
//! underlying error is written to the server log together with a correlation
//! id, and only the stable message prefix plus that id goes to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

/// Application error type that converts to HTTP responses.
///
/// Every variant is terminal for the request being handled; nothing is
/// retried by the service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body was not well-formed JSON for the record schema.
    #[error("Invalid input")]
    InvalidInput,

    /// The date-of-birth field did not parse as a calendar date.
    #[error("Invalid Date of Birth format. Use YYYY-MM-DD")]
    InvalidDateOfBirth,

    /// One or more fields failed the per-field validation rules.
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// The store could not be reached or failed its liveness check.
    #[error("Database connection failed")]
    DatabaseConnection(#[source] sqlx::Error),

    /// The insert statement failed.
    #[error("Failed to insert user")]
    Query(#[source] sqlx::Error),
}

/// JSON body for field-validation failures.
#[derive(Serialize)]
struct ValidationResponse {
    error: &'static str,
    violations: Vec<Violation>,
}

/// One offending field and the rule it broke.
#[derive(Serialize)]
struct Violation {
    field: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input").into_response(),
            AppError::InvalidDateOfBirth => (
                StatusCode::BAD_REQUEST,
                "Invalid Date of Birth format. Use YYYY-MM-DD",
            )
                .into_response(),
            AppError::Validation(errors) => {
                let body = ValidationResponse {
                    error: "validation_failed",
                    violations: violations(&errors),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::DatabaseConnection(err) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error = %err, %error_id, "Database connection failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database connection failed (error id: {error_id})"),
                )
                    .into_response()
            }
            AppError::Query(err) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error = %err, %error_id, "Failed to insert user");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to insert user (error id: {error_id})"),
                )
                    .into_response()
            }
        }
    }
}

/// Flatten `ValidationErrors` into a list ordered by field name so that
/// responses are deterministic.
fn violations(errors: &validator::ValidationErrors) -> Vec<Violation> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, messages)| {
            messages.into_iter().map(move |message| Violation {
                field: field.clone(),
                message,
            })
        })
        .collect()
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

//! Custom error types for the conference service

use std::collections::BTreeSet;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::ProviderError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::validation::ValidationError;

/// Custom error type for the conference service
#[derive(Error, Debug)]
pub enum ConferenceError {
    /// Lookup yielded no match
    #[error("User not found")]
    NotFound,

    /// One or more login form rules failed
    #[error("{}", first_message(.0))]
    ValidationFailed(BTreeSet<ValidationError>),

    /// A meeting references a user id absent from the directory
    #[error("Meeting {meeting_id} references unknown user {user_id}")]
    UnresolvedReference { meeting_id: i64, user_id: String },

    /// The remote provider could not be reached or answered badly
    #[error("Could not load data")]
    Transport(#[from] ProviderError),

    /// A meeting date is not a millisecond timestamp
    #[error("Invalid meeting date: {0}")]
    InvalidDate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn first_message(errors: &BTreeSet<ValidationError>) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "Validation failed".to_string())
}

impl IntoResponse for ConferenceError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            ConferenceError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": message })),
            ConferenceError::ValidationFailed(errors) => {
                let errors: Vec<String> = errors.iter().map(ToString::to_string).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "error": message, "errors": errors }),
                )
            }
            ConferenceError::Transport(source) => {
                error!("Remote provider failure: {}", source);
                (StatusCode::BAD_GATEWAY, json!({ "error": message }))
            }
            ConferenceError::UnresolvedReference { .. }
            | ConferenceError::InvalidDate(_)
            | ConferenceError::Configuration(_) => {
                error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for conference results
pub type ConferenceResult<T> = Result<T, ConferenceError>;

//! Unified error types for the Shypt Solution site
//!
//! This module defines error types for each layer:
//! - `UpstreamError`: outbound HTTP failures (GitHub API, scraped pages, webhook)
//! - `AppError`: metadata endpoint errors, rendered as `{"error": ...}`
//! - `ContactError`: contact relay errors, rendered as `{"message": ...}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Outbound HTTP errors shared by every adapter
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl UpstreamError {
    /// HTTP status reported by the upstream, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Request(e) => e.status().map(|s| s.as_u16()),
            UpstreamError::Deserialization(_) => None,
        }
    }
}

/// Metadata endpoint errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

/// Error body for the metadata endpoint
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unexpected(msg) => {
                tracing::error!("Metadata fetch error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch metadata".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Contact relay errors
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingField,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    /// The webhook answered with something other than 200
    #[error("Error sending message")]
    Rejected { status: u16 },

    /// The webhook could not be reached or the request could not be built
    #[error("Error sending message. Please try again later.")]
    RelayFailed(String),
}

/// Message body shared by every contact relay response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = match &self {
            ContactError::MissingField | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
            ContactError::Rejected { status } => {
                tracing::warn!(status, "Notification webhook rejected contact message");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ContactError::RelayFailed(cause) => {
                tracing::error!("Contact form error: {}", cause);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(MessageResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

//! HTTP error handling and response conversion.
//!
//! Handler errors map to a status code and a JSON body. Form validation failures
//! carry the per-field messages so a client can render them next to each input.

use crate::domain::{forms::FormErrors, shared::errors::DomainError};
use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request parameters (400).
    BadRequest(String),

    /// Submitted form failed field validation (400).
    InvalidForm(FormErrors),

    /// City store unavailable or query failed (500).
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InvalidForm(errors) => {
                let fields: Vec<_> = errors.fields().collect();
                write!(f, "Invalid form: {}", fields.join(", "))
            }
            Self::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::InvalidForm(_) => "Form validation failed".into(),
            Self::Database(_) => "Database operation failed".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            _ => tracing::warn!("error={}", self),
        }

        let body = match self {
            Self::InvalidForm(fields) => json!({ "error": message, "fields": fields }),
            _ => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::BadRequest(msg),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Database(msg)
            }
        }
    }
}

// === Extractor Rejection Conversion ===

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FormErrors> for AppError {
    fn from(errors: FormErrors) -> Self {
        AppError::InvalidForm(errors)
    }
}

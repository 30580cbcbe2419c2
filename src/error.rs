//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the crate returns [`AppError`]. Variants map
//! one-to-one onto the failure kinds a caller has to tell apart: a malformed
//! code, a bad target URL, a taken code, an exhausted generator, a missing
//! link, or a store failure.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed short code or request body.
    #[error("{message}")]
    InvalidFormat { message: String, details: Value },

    /// Target URL is missing, unparsable, or not `http`/`https`.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// Requested code is already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Random generation collided on every attempt.
    #[error("{message}")]
    GenerationExhausted { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_format(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and stable wire code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidFormat { .. } => (StatusCode::BAD_REQUEST, "invalid_format"),
            AppError::InvalidUrl { .. } => (StatusCode::BAD_REQUEST, "invalid_url"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::GenerationExhausted { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "generation_exhausted")
            }
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into the serializable payload used in responses.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::InvalidFormat { message, details }
            | AppError::InvalidUrl { message, details }
            | AppError::Conflict { message, details }
            | AppError::GenerationExhausted { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Code already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();

        AppError::invalid_format(
            "Request validation failed",
            json!({ "fields": fields, "reason": errors.to_string() }),
        )
    }
}

/// Maps body extraction failures onto the typed errors.
///
/// A wrongly typed `targetUrl` is an invalid URL; anything else wrong with
/// the body (syntax, content type, other fields) is an invalid format.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let reason = rejection.body_text();

        if matches!(rejection, JsonRejection::JsonDataError(_))
            && (reason.contains("targetUrl") || reason.contains("target_url"))
        {
            return AppError::invalid_url("Invalid or missing URL", json!({ "reason": reason }));
        }

        AppError::invalid_format("Invalid request body", json!({ "reason": reason }))
    }
}

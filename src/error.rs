//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Stable error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 3,
    BadValue = 18,
    NoSuchData = 20,
    Ambiguous = 22,
    ProcedureFailure = 23,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Ambiguous lookup: {0}")]
    Ambiguous(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Raised by the database while executing a stored procedure
    #[error("Procedure {procedure} failed: {message}")]
    Procedure {
        procedure: &'static str,
        message: String,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classify a failed procedure call. Errors reported by the database
    /// itself (raised exceptions, constraint violations) belong to the caller;
    /// driver and connectivity failures stay server errors.
    pub fn procedure(procedure: &'static str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => AppError::Procedure {
                procedure,
                message: db.message().to_string(),
            },
            other => AppError::Database(other),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Ambiguous(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Procedure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message) = match &self {
            AppError::NotFound(msg) => (ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) | AppError::BadRequest(msg) => {
                (ErrorCode::BadValue, msg.clone())
            }
            AppError::Ambiguous(msg) => (ErrorCode::Ambiguous, msg.clone()),
            AppError::Procedure { procedure, message } => {
                tracing::warn!(procedure, "Procedure rejected call: {}", message);
                (ErrorCode::ProcedureFailure, message.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (ErrorCode::DbFailure, "Database error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (ErrorCode::Failure, "Internal server error".to_string())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

//! Unified error handling for the editor fee calculator
//!
//! This module provides the error type shared by every crate in the
//! workspace, with automatic HTTP response mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Main application error type
///
/// All errors in the application should be converted to this type.
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Database Errors ====================
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database pool error: {0}")]
    Pool(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    // ==================== Business Logic Errors ====================
    /// A category has no rate entry. The rate table was never seeded.
    #[error("Rate not configured for category: {0}")]
    RateNotFound(String),

    #[error("Editor not found: {0}")]
    EditorNotFound(i32),

    #[error("Project not found: {0}")]
    ProjectNotFound(i32),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    // ==================== Resource Errors ====================
    #[error("Not found: {0}")]
    NotFound(String),

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation(_) | AppError::InvalidInput(_) | AppError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found
            AppError::EditorNotFound(_) | AppError::ProjectNotFound(_) | AppError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }

            // 500 Internal Server Error
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::Pool(_) => "pool_error",
            AppError::Migration(_) => "migration_error",
            AppError::RateNotFound(_) => "rate_not_configured",
            AppError::EditorNotFound(_) => "editor_not_found",
            AppError::ProjectNotFound(_) => "project_not_found",
            AppError::Validation(_) => "validation_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::MissingField(_) => "missing_field",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }

    /// Whether the caller can fix the request and try again
    pub fn is_recoverable(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = json!({
            "error": self.error_code(),
            "message": self.to_string(),
            "status": status.as_u16(),
        });

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Validation("duration".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::EditorNotFound(7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::RateNotFound("full_edit".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::RateNotFound("rough_audio".to_string()).error_code(),
            "rate_not_configured"
        );
        assert_eq!(AppError::ProjectNotFound(1).error_code(), "project_not_found");
    }

    #[test]
    fn test_recoverable() {
        assert!(AppError::Validation("x".to_string()).is_recoverable());
        assert!(!AppError::RateNotFound("full_edit".to_string()).is_recoverable());
        assert!(!AppError::Database("down".to_string()).is_recoverable());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: AppError = serde_json::from_str::<i64>("not json").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::handlers::shared::ErrorResponse;

// Extended result code SQLite reports for RAISE(ABORT, ...) inside a trigger
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";
const SQLITE_CONSTRAINT: &str = "19";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    #[error("Internal server error{}", .0.as_ref().map_or("".to_string(), |s| format!(": {}", s)))]
    InternalServerError(Option<String>),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    /// Error category reported alongside the status code.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation Error",
            AppError::NotFound(_) => "Not Found",
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => "Server Error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        if status_code.is_server_error() {
            log::error!(
                "Request failed with status {}: {}",
                status_code,
                error_message
            );
        } else {
            log::warn!(
                "Request rejected with status {}: {}",
                status_code,
                error_message
            );
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            status: status_code.as_u16(),
            error: self.category().to_string(),
            message: error_message,
        })
    }
}

/// Maps a storage-level constraint failure to the message a client should
/// see. Returns `None` for anything that is not a constraint violation.
fn constraint_violation_message(error: &sqlx::Error) -> Option<String> {
    let db_error = error.as_database_error()?;
    let message = db_error.message();

    match db_error.kind() {
        ErrorKind::UniqueViolation => Some(
            if message.contains("employees.employee_id") {
                "Employee ID already exists"
            } else if message.contains("employees.email") {
                "Email already in use"
            } else if message.contains("shift_preferences.") {
                "Preference already exists for this employee and shift"
            } else {
                "Record already exists"
            }
            .to_string(),
        ),
        ErrorKind::ForeignKeyViolation => {
            Some("Record is referenced by or references a missing record".to_string())
        }
        ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
            Some(format!("Invalid data: {}", message))
        }
        _ if matches!(
            db_error.code().as_deref(),
            Some(SQLITE_CONSTRAINT_TRIGGER | SQLITE_CONSTRAINT)
        ) =>
        {
            Some(message.to_string())
        }
        _ => None,
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        if let Some(message) = constraint_violation_message(&error) {
            log::warn!("Constraint violation: {}", error);
            return AppError::Validation(message);
        }

        log::error!("Database error: {}", error);
        AppError::DatabaseError(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Repositories wrap sqlx errors in anyhow; unwrap them so constraint
        // violations keep their client-facing meaning.
        match error.downcast::<sqlx::Error>() {
            Ok(sqlx_err) => AppError::from(sqlx_err),
            Err(original_error) => {
                log::error!("Anyhow error: {}", original_error);
                AppError::InternalServerError(Some(original_error.to_string()))
            }
        }
    }
}

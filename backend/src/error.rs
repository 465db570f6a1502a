//! Error type shared by the store and the HTTP handlers.
//!
//! Every failure is scoped to the single request that caused it. Handlers turn an
//! `AppError` into a response through `ResponseError`:
//!
//! | variant        | status |
//! |----------------|--------|
//! | `Validation`   | 400    |
//! | `NoSelection`  | 400    |
//! | `NotFound`     | 404    |
//! | `Integrity`    | 409    |
//! | `Database`     | 503    |
//! | `Encoding`     | 500    |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::validation::ValidationError;
use rusqlite::ErrorCode;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A uniqueness or foreign key constraint refused the write.
    #[error("{0}")]
    Integrity(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Items must be selected in order to perform actions on them.")]
    NoSelection,

    #[error("database error: {0}")]
    Database(rusqlite::Error),

    #[error("could not encode list column: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                AppError::Integrity(constraint_message(message.as_deref().unwrap_or_default()))
            }
            _ => AppError::Database(err),
        }
    }
}

/// Rewrites SQLite's constraint text into the message an operator sees on the form.
fn constraint_message(raw: &str) -> String {
    let known = [
        (
            "questions.section_id, questions.label",
            "Question with this Section and Label already exists.",
        ),
        ("courses.code", "Course with this Code already exists."),
        ("courses.name", "Course with this Name already exists."),
        (
            "application_templates.name",
            "Application template with this Name already exists.",
        ),
        ("FOREIGN KEY", "The referenced record does not exist."),
    ];
    known
        .iter()
        .find(|(needle, _)| raw.contains(needle))
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| raw.to_string())
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::NoSelection => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Integrity(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

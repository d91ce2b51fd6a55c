//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! The HTTP mapping lives in `api::error`.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Record lookup by id missed
    #[error("{0}")]
    NotFound(String),
    /// Payload was decoded but required data is missing or malformed
    #[error("{0}")]
    Validation(String),
    /// Insert or update violated a uniqueness or foreign-key constraint
    #[error("{0}")]
    Conflict(String),
    /// Declared content type is absent or neither XML nor JSON
    #[error("Not a JSON or XML!")]
    UnsupportedMediaType,
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn missing_data() -> Self {
        DomainError::Validation("Missing data!".to_string())
    }
}

// Constraint violations are classified here so services only see `Conflict`
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::Conflict(msg),
            _ => match e {
                DbErr::RecordNotUpdated => DomainError::NotFound("Record does not exist".to_string()),
                other => DomainError::Database(other.to_string()),
            },
        }
    }
}

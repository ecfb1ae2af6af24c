//! Unified error handling.
//!
//! Provides a single error type for the storage layer and the CLI.
//! Constraint violations raised by the database are surfaced as typed
//! variants so callers can tell a duplicate key from a broken reference.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    #[error("Referential integrity violation: {0}")]
    ForeignKey(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(sea_orm::DbErr),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and exit reporting
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::ForeignKey(_) => "FOREIGN_KEY_VIOLATION",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for uniqueness violations.
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }

    /// True for foreign-key and restrict violations.
    pub fn is_foreign_key(&self) -> bool {
        matches!(self, AppError::ForeignKey(_))
    }
}

// =============================================================================
// Database Error Conversion
// =============================================================================

#[cfg(feature = "database")]
impl AppError {
    /// Map a database error, naming the affected entity for constraint
    /// violations.
    pub fn from_db(err: sea_orm::DbErr, entity: impl Into<String>) -> Self {
        use sea_orm::SqlErr;

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                let entity = entity.into();
                tracing::debug!(%entity, %detail, "Unique constraint violated");
                AppError::Conflict(entity)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                let entity = entity.into();
                tracing::debug!(%entity, %detail, "Foreign key constraint violated");
                AppError::ForeignKey(entity)
            }
            _ => AppError::Database(err),
        }
    }
}

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::from_db(err, "Record")
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn foreign_key(msg: impl Into<String>) -> Self {
        AppError::ForeignKey(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by registry storage operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A field was rejected before reaching the database.
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist. Also raised when traversing a
    /// pak/save reference whose target has been deleted.
    #[error("{0}")]
    NotFound(String),

    /// A unique constraint rejected the write.
    #[error("{0}")]
    Uniqueness(String),

    /// A referenced record was absent at write time.
    #[error("{0}")]
    ReferentialIntegrity(String),

    #[error("database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for RegistryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => RegistryError::Uniqueness(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                RegistryError::ReferentialIntegrity(msg)
            }
            _ => RegistryError::Database(err),
        }
    }
}

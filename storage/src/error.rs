//! Storage error type shared by all repositories.

use thiserror::Error;

/// Persistence failed: the underlying database is unreachable or rejected
/// the operation.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

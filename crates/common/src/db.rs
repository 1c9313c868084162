//! Shared database types for Chatline
//!
//! This module provides the error vocabulary every repository implementation
//! speaks, whether it is backed by Postgres or by memory.

use crate::error::Error;
use thiserror::Error;

/// Repository-level error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::Database(e) => Error::Database(e),
            RepositoryError::Storage(msg) => Error::Storage(msg),
        }
    }
}

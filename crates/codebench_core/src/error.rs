//! Application error types for workspace and storage logic.
use thiserror::Error;

/// Contract errors returned by workspace operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("unknown document: {0}")]
    UnknownDocument(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("cannot close the last open document")]
    CannotCloseLastDocument,
}

/// Errors from the saved-document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] redb::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found")]
    NotFound,
}

impl From<redb::DatabaseError> for StoreError {
    fn from(value: redb::DatabaseError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(value: redb::TransactionError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(value: redb::TableError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(value: redb::StorageError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(value: redb::CommitError) -> Self {
        Self::Database(value.into())
    }
}

//! Error types for the phonebook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation never errors (validators return `bool`); see
//! [`crate::domain::ValidationError`] for form-level verdicts.

use thiserror::Error;

/// Errors that can occur when loading or saving the contacts file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid UTF-8 text
    #[error("File is not valid UTF-8 text")]
    InvalidEncoding,

    /// A record block ended before one of its mandatory lines
    #[error("Record truncated: missing {field} line")]
    Truncated { field: &'static str },

    /// The phone count line is not an unsigned number
    #[error("Invalid phone count: {0:?}")]
    InvalidPhoneCount(String),
}

/// Errors reported by a contact store backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store handle has not been opened (or was closed)
    #[error("Contact store is not open")]
    NotOpen,

    /// No contact exists with the given surrogate id
    #[error("Contact not found: {0}")]
    NotFound(i64),

    /// Another contact already uses this email
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

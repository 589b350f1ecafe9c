//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by [`AddressBook`](crate::book::AddressBook) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field value failed its validation rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Another contact already uses this first/last name pair
    #[error("Contact with this name already exists: {first_name} {last_name}")]
    DuplicateContact {
        first_name: String,
        last_name: String,
    },

    /// No contact with this first/last name pair
    #[error("Contact not found: {first_name} {last_name}")]
    NotFound {
        first_name: String,
        last_name: String,
    },
}

impl AddressBookError {
    pub(crate) fn duplicate(first_name: &str, last_name: &str) -> Self {
        Self::DuplicateContact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub(crate) fn not_found(first_name: &str, last_name: &str) -> Self {
        Self::NotFound {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

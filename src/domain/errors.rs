//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Each maps to a message the view layer can show as-is.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Login against an email with no matching account
    UserNotFound,
    /// Signup with an email that is already registered
    DuplicateEmail,
    /// Rent attempted while no copies are available
    BookUnavailable,
    /// Resource not found
    NotFound,
    /// Key-value store read/write failure
    Storage(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::UserNotFound => write!(f, "User not found. Please sign up first."),
            DomainError::DuplicateEmail => write!(f, "Email already exists. Please login instead."),
            DomainError::BookUnavailable => {
                write!(f, "No copies of this book are currently available.")
            }
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversions from store-layer failures (used in infrastructure)
impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

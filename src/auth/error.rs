// Session store error types

use std::fmt;

/// Errors returned by session store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Registration attempted with an email that already has an account
    DuplicateEmail,
    /// Login attempted with an email/secret pair matching no account
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEmail => write!(f, "User already registered"),
            Self::InvalidCredentials => write!(f, "Invalid login credentials"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Result type for session store operations
pub type AuthResult<T> = Result<T, AuthError>;

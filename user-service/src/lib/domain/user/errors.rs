use thiserror::Error;

/// Error for Username validation failures.
///
/// Display strings double as client-facing validation messages, so the
/// wording here is part of the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Field: 'username' cannot be empty")]
    Empty,

    #[error("Field: 'username' cannot start or end with whitespace")]
    UntrimmedWhitespace,
}

/// Error for password policy violations at registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Field: 'password' cannot start or end with whitespace")]
    UntrimmedWhitespace,

    #[error("Field: 'password' must be at least 8 characters long")]
    TooShort,

    #[error("Field: 'password' must be at most 72 characters long")]
    TooLong,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),

    #[error(transparent)]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("User not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("The username already exists")]
    UsernameAlreadyExists(String),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

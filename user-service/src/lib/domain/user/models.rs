use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered user. The password digest never leaves the
/// persistence and credential-check paths; outward views are built from
/// the other fields only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub fullname: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for auth::UserClaims {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            fullname: user.fullname.clone(),
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// A username is rejected when it is empty or carries leading/trailing
/// whitespace; anything else is the user's choice. Uniqueness is enforced
/// by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is the empty string
    /// * `UntrimmedWhitespace` - Leading or trailing whitespace
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        if username.trim() != username {
            return Err(UsernameError::UntrimmedWhitespace);
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted at registration.
///
/// Request-scoped only; never persisted or logged. The policy bounds are
/// checked here, before the plaintext reaches the hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 72;

    /// Create a policy-checked password.
    ///
    /// # Errors
    /// * `UntrimmedWhitespace` - Leading or trailing whitespace
    /// * `TooShort` - Fewer than 8 characters
    /// * `TooLong` - More than 72 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.trim() != password {
            return Err(PasswordPolicyError::UntrimmedWhitespace);
        }

        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort);
        }
        if length > Self::MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong);
        }

        Ok(Self(password))
    }

    /// Get the plaintext for hashing.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub password: Password,
    pub fullname: String,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Policy-checked plaintext (hashed by the service)
    /// * `fullname` - Already trimmed; empty when the client sent none
    pub fn new(username: Username, password: Password, fullname: String) -> Self {
        Self {
            username,
            password,
            fullname,
        }
    }
}

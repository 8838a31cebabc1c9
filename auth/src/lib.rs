//! Authentication library for the Noteful services
//!
//! Provides the credential and token infrastructure behind the user API:
//! - Password hashing (Argon2id)
//! - Claims token generation and validation (HS256)
//! - Authentication coordination (verify-then-issue, refresh)
//!
//! The service keeps its own domain model and adapts these pieces through
//! its ports, so the library stays free of persistence concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, UserClaims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let digest = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let user = UserClaims {
//!     id: "333333333333333333333300".to_string(),
//!     username: "exampleUser".to_string(),
//!     fullname: "Example User".to_string(),
//! };
//! let claims = Claims::for_user(user, 7);
//! let result = auth.authenticate("password123", &digest, &claims).unwrap();
//!
//! // Refresh: validate, then re-issue with a fresh expiry
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! let renewed = auth.issue_token(&decoded.renewed(7)).unwrap();
//! assert!(!renewed.is_empty());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::UserClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;

use thiserror::Error;

/// Error type for JWT operations.
///
/// `Expired` stays distinct from `Invalid` so callers can log which one
/// occurred; both collapse into the same unauthorized response upstream.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}

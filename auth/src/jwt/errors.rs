use thiserror::Error;

/// Error type for JWT operations.
///
/// Decode failures are kept distinct so callers can log and test them
/// separately, even though they collapse to one outcome at the HTTP boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}

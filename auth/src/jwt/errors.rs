use thiserror::Error;

/// Error type for token operations.
///
/// The variants exist so callers can log and test which check failed;
/// anything shown to an end user must collapse them into one generic
/// authentication failure.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token type does not match the expected type")]
    WrongTokenType,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

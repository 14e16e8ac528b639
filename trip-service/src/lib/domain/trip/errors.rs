use thiserror::Error;

use crate::trip::models::TripId;
use crate::trip::models::TripStatus;

/// Error for TripName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripNameError {
    #[error("Trip name must not be empty")]
    Empty,

    #[error("Trip name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for TripDescription validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripDescriptionError {
    #[error("Trip description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for trip password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripPasswordError {
    #[error("Trip password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Trip password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for unrecognized status strings coming back from the store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripStatusError {
    #[error("Unknown trip status: {0}")]
    Unknown(String),
}

/// Top-level error for all trip-related operations
#[derive(Debug, Clone, Error)]
pub enum TripError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid trip name: {0}")]
    InvalidName(#[from] TripNameError),

    #[error("Invalid trip description: {0}")]
    InvalidDescription(#[from] TripDescriptionError),

    #[error("Invalid trip password: {0}")]
    InvalidPassword(#[from] TripPasswordError),

    #[error("Invalid trip status: {0}")]
    InvalidStatus(#[from] TripStatusError),

    // Domain-level errors
    #[error("Trip not found: {0}")]
    NotFound(TripId),

    /// The conditional update matched no row. Deliberately collapses
    /// not-found, not-owned, and wrong-prior-state into one answer so the
    /// caller learns nothing about trips it does not own.
    #[error("Trip {id} was not transitioned: it does not exist, is not yours, or is not {expected}")]
    TransitionRejected { id: TripId, expected: TripStatus },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for TripError {
    fn from(err: anyhow::Error) -> Self {
        TripError::Unknown(err.to_string())
    }
}

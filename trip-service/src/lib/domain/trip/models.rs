use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::trip::errors::TripDescriptionError;
use crate::trip::errors::TripNameError;
use crate::trip::errors::TripPasswordError;
use crate::trip::errors::TripStatusError;

/// Trip aggregate entity.
///
/// Mutated only through the two lifecycle transitions; never deleted.
#[derive(Debug, Clone)]
pub struct Trip {
    pub id: TripId,
    pub name: TripName,
    pub description: TripDescription,
    pub password_hash: String,
    pub creator_id: UserId,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trip unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripId(pub i64);

impl TripId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trip lifecycle state.
///
/// Moves only forward, `created → active → ended`, one step at a time.
/// A transition is legal only when the current status exactly matches the
/// expected pre-state, and only the creator may request it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    Created,
    Active,
    Ended,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Created => "created",
            TripStatus::Active => "active",
            TripStatus::Ended => "ended",
        }
    }
}

impl FromStr for TripStatus {
    type Err = TripStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(TripStatus::Created),
            "active" => Ok(TripStatus::Active),
            "ended" => Ok(TripStatus::Ended),
            other => Err(TripStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trip name value type
///
/// Ensures the name is 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripName(String);

impl TripName {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid trip name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, TripNameError> {
        if name.is_empty() {
            Err(TripNameError::Empty)
        } else if name.len() > Self::MAX_LENGTH {
            Err(TripNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trip description value type, at most 500 characters. May be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDescription(String);

impl TripDescription {
    const MAX_LENGTH: usize = 500;

    /// Create a new valid trip description.
    ///
    /// # Errors
    /// * `TooLong` - Description longer than 500 characters
    pub fn new(description: String) -> Result<Self, TripDescriptionError> {
        if description.len() > Self::MAX_LENGTH {
            Err(TripDescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: description.len(),
            })
        } else {
            Ok(Self(description))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated plaintext trip password, 4-50 characters, pending hashing.
#[derive(Clone, PartialEq, Eq)]
pub struct TripPassword(String);

impl TripPassword {
    const MIN_LENGTH: usize = 4;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid trip password.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 4 characters
    /// * `TooLong` - Password longer than 50 characters
    pub fn new(password: String) -> Result<Self, TripPasswordError> {
        let length = password.len();
        if length < Self::MIN_LENGTH {
            Err(TripPasswordError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(TripPasswordError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TripPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TripPassword(***)")
    }
}

/// Command to create a new trip with domain types
#[derive(Debug)]
pub struct CreateTripCommand {
    pub name: TripName,
    pub description: TripDescription,
    pub password: TripPassword,
}

impl CreateTripCommand {
    pub fn new(name: TripName, description: TripDescription, password: TripPassword) -> Self {
        Self {
            name,
            description,
            password,
        }
    }
}

/// Fields for a trip row the datastore has not assigned an id to yet.
/// New trips always enter the lifecycle in the `created` status.
#[derive(Debug)]
pub struct NewTrip {
    pub name: TripName,
    pub description: TripDescription,
    pub password_hash: String,
    pub creator_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [TripStatus::Created, TripStatus::Active, TripStatus::Ended] {
            assert_eq!(status.as_str().parse::<TripStatus>().unwrap(), status);
        }
        assert!("paused".parse::<TripStatus>().is_err());
    }

    #[test]
    fn test_trip_name_bounds() {
        assert!(TripName::new("Summer roadtrip".to_string()).is_ok());
        assert!(matches!(
            TripName::new(String::new()),
            Err(TripNameError::Empty)
        ));
        assert!(matches!(
            TripName::new("x".repeat(101)),
            Err(TripNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_trip_description_bounds() {
        assert!(TripDescription::new(String::new()).is_ok());
        assert!(matches!(
            TripDescription::new("x".repeat(501)),
            Err(TripDescriptionError::TooLong { .. })
        ));
    }

    #[test]
    fn test_trip_password_bounds() {
        assert!(TripPassword::new("1234".to_string()).is_ok());
        assert!(matches!(
            TripPassword::new("123".to_string()),
            Err(TripPasswordError::TooShort { .. })
        ));
        assert!(matches!(
            TripPassword::new("x".repeat(51)),
            Err(TripPasswordError::TooLong { .. })
        ));
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::UserId;
use crate::trip::errors::TripError;
use crate::trip::models::CreateTripCommand;
use crate::trip::models::NewTrip;
use crate::trip::models::Trip;
use crate::trip::models::TripId;
use crate::trip::models::TripStatus;
use crate::trip::ports::TripRepository;
use crate::trip::ports::TripServicePort;

/// Concrete implementation of TripServicePort.
///
/// The lifecycle transitions hold no locks: the repository's conditional
/// update is the sole arbiter, and a zero-row outcome is surfaced as one
/// undifferentiated rejection.
pub struct TripService<TR>
where
    TR: TripRepository,
{
    repository: Arc<TR>,
    authenticator: Arc<Authenticator>,
}

impl<TR> TripService<TR>
where
    TR: TripRepository,
{
    pub fn new(repository: Arc<TR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<TR> TripServicePort for TripService<TR>
where
    TR: TripRepository,
{
    async fn create_trip(
        &self,
        command: CreateTripCommand,
        creator_id: UserId,
    ) -> Result<Trip, TripError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| TripError::Unknown(format!("Trip password hashing failed: {}", e)))?;

        self.repository
            .create(NewTrip {
                name: command.name,
                description: command.description,
                password_hash,
                creator_id,
            })
            .await
    }

    async fn get_trip(&self, id: TripId) -> Result<Trip, TripError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TripError::NotFound(id))
    }

    async fn list_trips(&self, creator_id: UserId) -> Result<Vec<Trip>, TripError> {
        self.repository.find_by_creator(creator_id).await
    }

    async fn start_trip(&self, id: TripId, requester_id: UserId) -> Result<(), TripError> {
        let transitioned = self
            .repository
            .transition_status(id, requester_id, TripStatus::Created, TripStatus::Active)
            .await?;

        if !transitioned {
            return Err(TripError::TransitionRejected {
                id,
                expected: TripStatus::Created,
            });
        }

        tracing::info!(trip_id = %id, user_id = %requester_id, "Trip started");
        Ok(())
    }

    async fn end_trip(&self, id: TripId, requester_id: UserId) -> Result<(), TripError> {
        let transitioned = self
            .repository
            .transition_status(id, requester_id, TripStatus::Active, TripStatus::Ended)
            .await?;

        if !transitioned {
            return Err(TripError::TransitionRejected {
                id,
                expected: TripStatus::Active,
            });
        }

        tracing::info!(trip_id = %id, user_id = %requester_id, "Trip ended");
        Ok(())
    }
}

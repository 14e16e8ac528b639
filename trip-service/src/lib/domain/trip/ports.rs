use async_trait::async_trait;

use crate::domain::user::models::UserId;
use crate::trip::errors::TripError;
use crate::trip::models::CreateTripCommand;
use crate::trip::models::NewTrip;
use crate::trip::models::Trip;
use crate::trip::models::TripId;
use crate::trip::models::TripStatus;

/// Port for trip domain service operations.
#[async_trait]
pub trait TripServicePort: Send + Sync + 'static {
    /// Create a new trip owned by the given user, in the `created` status.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `Unknown` - Trip password hashing failed
    async fn create_trip(
        &self,
        command: CreateTripCommand,
        creator_id: UserId,
    ) -> Result<Trip, TripError>;

    /// Retrieve a trip by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Trip does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_trip(&self, id: TripId) -> Result<Trip, TripError>;

    /// Retrieve the trips created by a user, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_trips(&self, creator_id: UserId) -> Result<Vec<Trip>, TripError>;

    /// Transition a trip from `created` to `active`.
    ///
    /// At most once: a second `start` finds the trip no longer in
    /// `created` and is rejected.
    ///
    /// # Errors
    /// * `TransitionRejected` - Trip missing, not owned by the requester,
    ///   or not in the `created` status
    /// * `DatabaseError` - Database operation failed
    async fn start_trip(&self, id: TripId, requester_id: UserId) -> Result<(), TripError>;

    /// Transition a trip from `active` to `ended`.
    ///
    /// # Errors
    /// * `TransitionRejected` - Trip missing, not owned by the requester,
    ///   or not in the `active` status
    /// * `DatabaseError` - Database operation failed
    async fn end_trip(&self, id: TripId, requester_id: UserId) -> Result<(), TripError>;
}

/// Persistence operations for the trip aggregate.
#[async_trait]
pub trait TripRepository: Send + Sync + 'static {
    /// Persist a new trip, letting the store assign the id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_trip: NewTrip) -> Result<Trip, TripError>;

    /// Retrieve a trip by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, TripError>;

    /// Retrieve the trips created by a user, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_creator(&self, creator_id: UserId) -> Result<Vec<Trip>, TripError>;

    /// Atomically move a trip between statuses, guarded on owner and the
    /// expected prior status.
    ///
    /// Implemented as a single conditional update; the returned flag is
    /// the affected-row count. `false` means no row matched all three
    /// predicates — which one failed is intentionally not reported. Under
    /// concurrent calls the store serializes the updates, so exactly one
    /// caller observes `true`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn transition_status(
        &self,
        id: TripId,
        creator_id: UserId,
        from: TripStatus,
        to: TripStatus,
    ) -> Result<bool, TripError>;
}

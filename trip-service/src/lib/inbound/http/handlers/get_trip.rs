use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::TripData;
use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::router::AppState;
use crate::trip::models::TripId;

pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
) -> Result<ApiSuccess<TripData>, ApiError> {
    state
        .trip_service
        .get_trip(TripId(trip_id))
        .await
        .map_err(ApiError::from)
        .map(|ref trip| ApiSuccess::new(StatusCode::OK, trip.into()))
}

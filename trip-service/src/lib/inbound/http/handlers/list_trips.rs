use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TripData;
use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_trips(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TripData>>, ApiError> {
    state
        .trip_service
        .list_trips(caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|trips| {
            ApiSuccess::new(StatusCode::OK, trips.iter().map(TripData::from).collect())
        })
}

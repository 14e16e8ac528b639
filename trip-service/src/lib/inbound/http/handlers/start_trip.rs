use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::trip::models::TripId;

pub async fn start_trip(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(trip_id): Path<i64>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    state
        .trip_service
        .start_trip(TripId(trip_id), caller.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: "Trip started successfully".to_string(),
        },
    ))
}

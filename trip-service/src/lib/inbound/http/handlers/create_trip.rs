use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::TripData;
use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::trip::errors::TripDescriptionError;
use crate::trip::errors::TripNameError;
use crate::trip::errors::TripPasswordError;
use crate::trip::models::CreateTripCommand;
use crate::trip::models::TripDescription;
use crate::trip::models::TripName;
use crate::trip::models::TripPassword;

pub async fn create_trip(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTripRequest>,
) -> Result<ApiSuccess<TripData>, ApiError> {
    state
        .trip_service
        .create_trip(body.try_into_command()?, caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref trip| ApiSuccess::new(StatusCode::CREATED, trip.into()))
}

/// HTTP request body for creating a trip (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTripRequest {
    name: String,

    #[serde(default)]
    description: String,

    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateTripRequestError {
    #[error("Invalid trip name: {0}")]
    Name(#[from] TripNameError),

    #[error("Invalid trip description: {0}")]
    Description(#[from] TripDescriptionError),

    #[error("Invalid trip password: {0}")]
    Password(#[from] TripPasswordError),
}

impl CreateTripRequest {
    fn try_into_command(self) -> Result<CreateTripCommand, ParseCreateTripRequestError> {
        let name = TripName::new(self.name)?;
        let description = TripDescription::new(self.description)?;
        let password = TripPassword::new(self.password)?;
        Ok(CreateTripCommand::new(name, description, password))
    }
}

impl From<ParseCreateTripRequestError> for ApiError {
    fn from(err: ParseCreateTripRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

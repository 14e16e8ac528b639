use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::signup::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let (user, tokens) = state
        .user_service
        .login(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    let mut response = ApiSuccess::new(
        StatusCode::OK,
        SessionResponseData {
            user: (&user).into(),
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
        },
    )
    .into_response();

    for (name, value) in state.transport.session_headers(&tokens) {
        response.headers_mut().append(name, value);
    }

    Ok(response)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::router::AppState;

/// Drop the client-side session.
///
/// Tokens are stateless, so there is nothing to revoke server-side; in
/// cookie mode the session cookies are expired, in bearer mode the client
/// simply discards its pair.
pub async fn logout(State(state): State<AppState>) -> Response {
    let mut response = ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: "Logout successful".to_string(),
        },
    )
    .into_response();

    for (name, value) in state.transport.clear_headers() {
        response.headers_mut().append(name, value);
    }

    response
}

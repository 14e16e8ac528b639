use auth::TokenType;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated identity in request extensions.
///
/// Rebuilt from the validated access token on every request; nothing about
/// it is persisted or shared across requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that validates access tokens and adds the caller's identity
/// to request extensions.
///
/// Every failure path short-circuits with the same generic 401; which
/// check failed is visible only in the server log.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = state.transport.extract(&req).ok_or_else(|| {
        tracing::warn!("Request carried no access token");
        unauthorized()
    })?;

    let claims = state
        .authenticator
        .validate_token(&token, TokenType::Access)
        .map_err(|e| {
            tracing::warn!("Token validation failed: {}", e);
            unauthorized()
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.user_id),
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
}

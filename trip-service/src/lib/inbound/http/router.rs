use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Json;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_trip::create_trip;
use super::handlers::end_trip::end_trip;
use super::handlers::get_me::get_me;
use super::handlers::get_trip::get_trip;
use super::handlers::list_trips::list_trips;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::signup::signup;
use super::handlers::start_trip::start_trip;
use super::middleware::authenticate as auth_middleware;
use super::transport::TokenTransport;
use crate::domain::trip::service::TripService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::trip::PostgresTripRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub trip_service: Arc<TripService<PostgresTripRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub transport: TokenTransport,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    trip_service: Arc<TripService<PostgresTripRepository>>,
    authenticator: Arc<Authenticator>,
    transport: TokenTransport,
) -> Router {
    let state = AppState {
        user_service,
        trip_service,
        authenticator,
        transport,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/signup", post(signup))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout));

    let protected_routes = Router::new()
        .route("/api/v1/trips", post(create_trip).get(list_trips))
        .route("/api/v1/trips/:trip_id", get(get_trip))
        .route("/api/v1/trips/:trip_id/start", put(start_trip))
        .route("/api/v1/trips/:trip_id/end", put(end_trip))
        .route("/api/v1/users/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "trip-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

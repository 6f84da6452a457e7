//! relay-lambda
//!
//! HTTP boundary of the chat relay: decodes a chat turn, compiles the prompt,
//! calls the generation service and returns the reply with the extended history.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::http::{header, HeaderName, Method};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the router with all routes and middleware attached.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::POST, Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-amz-date"),
            HeaderName::from_static("x-api-key"),
            HeaderName::from_static("x-amz-security-token"),
        ]);

    Router::new()
        // Health (no identity needed)
        .route("/health", get(routes::health::health_check))
        // The function historically answered on any path; keep the bare root working.
        .route("/", post(routes::chat::chat))
        .route("/chat", post(routes::chat::chat))
        .layer(axum_mw::from_fn(middleware::identity::identify_caller))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}

//! Per-user real-time notification sockets, gated by a remote authentication service.
//!
//! Every connection to `/ws/notification/{user_id}/` passes through the gate middleware,
//! which verifies the `Authorization` query token and checks that the caller is asking
//! for their own channel. The socket handler closes anything the gate did not authorize.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;
pub use middleware::UserAuth;
pub use services::Gatekeeper;

use axum::routing::get;
use handlers::http;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the router (notification sockets, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let notification_routes = axum::Router::new()
        .route("/ws/notification/:user_id/", get(handlers::notification_ws))
        .route_layer(axum::middleware::from_fn_with_state(
            state.gatekeeper.clone(),
            middleware::gate_connection,
        ));

    axum::Router::new()
        .merge(notification_routes)
        .route("/health", get(http::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

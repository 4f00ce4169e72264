//! Router construction.

use axum::{
    middleware as axum_mw,
    routing::{get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::middleware::require_session;
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Routes that require a live session
    let protected = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route(
            "/api/coordination/docks",
            get(handlers::docks::list_docks).post(handlers::docks::create_dock),
        )
        .route(
            "/api/coordination/docks/:dock_id",
            get(handlers::docks::get_dock).patch(handlers::docks::update_dock),
        )
        .route(
            "/api/coordination/assign-dock",
            post(handlers::docks::assign_dock),
        )
        .route(
            "/api/carriers",
            get(handlers::carriers::list_carriers).post(handlers::carriers::create_carrier),
        )
        .route("/api/carriers/:carrier_id", get(handlers::carriers::get_carrier))
        .route(
            "/api/carriers/:carrier_id/position",
            patch(handlers::carriers::update_position),
        )
        .route("/api/v1/routing/plan", post(handlers::routing::create_route_plan))
        .route(
            "/api/v1/analytics/dashboard",
            get(handlers::analytics::dashboard),
        )
        .route(
            "/api/v1/analytics/sla-compliance",
            get(handlers::analytics::sla_compliance),
        )
        .route(
            "/api/v1/notifications/arrival-alert",
            post(handlers::notifications::arrival_alert),
        )
        .route(
            "/api/locations",
            get(handlers::locations::list_locations).post(handlers::locations::create_location),
        )
        .layer(axum_mw::from_fn_with_state(state.clone(), require_session));

    // Public routes (no auth): health, auth entry points, and the protocol
    // codec surface
    let public = Router::new()
        .route("/api/", get(handlers::health::root))
        .route("/api/health", get(handlers::health::health))
        .route("/api/auth/session", post(handlers::auth::create_session))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/v1/protocol/generate", post(handlers::protocol::generate))
        .route("/api/v1/protocol/validate", post(handlers::protocol::validate))
        .route(
            "/api/v1/protocol/test-vectors",
            get(handlers::protocol::test_vectors),
        )
        .route("/api/v1/resolve/*handle", get(handlers::resolve::resolve_l2));

    public
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

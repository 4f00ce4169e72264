//! coords-web — standalone REST server for the Coords spatial OS.
//!
//! Reads config from env vars:
//!   COORDS_BIND_ADDR         — listen address (default: 0.0.0.0:8000)
//!   COORDS_JWT_SECRET        — session JWT HMAC secret (dev default when unset)
//!   COORDS_OAUTH_SESSION_URL — external OAuth session-exchange endpoint
//!                              (optional; /api/auth/session answers 503
//!                              without it)

use coords::Stores;
use coords_web::auth::AuthConfig;
use coords_web::router::build_router;
use coords_web::seed::seed_demo_data;
use coords_web::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,coords_web=debug,tower_http=debug".into()),
        )
        .init();

    let jwt_secret = std::env::var("COORDS_JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("COORDS_JWT_SECRET not set, using development default");
        "coords-secret-key-change-in-production".into()
    });
    let oauth_session_url = std::env::var("COORDS_OAUTH_SESSION_URL").ok();
    let bind_addr =
        std::env::var("COORDS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let stores = Stores::in_memory();
    match seed_demo_data(&stores).await {
        Ok(true) => tracing::info!("demo data seeded"),
        Ok(false) => {}
        Err(e) => tracing::warn!("demo data seeding failed: {e}"),
    }

    let state = AppState::new(
        stores,
        AuthConfig::from_secret(jwt_secret.as_bytes()),
        oauth_session_url,
    );
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));
    tracing::info!("starting server on {bind_addr}");

    axum::serve(listener, app).await.expect("server error");
}

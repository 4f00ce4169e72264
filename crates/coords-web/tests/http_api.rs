//! HTTP-level integration tests for the Coords server contract: session
//! auth, dock/carrier coordination, and the protocol endpoint shapes.
//!
//! Everything runs against the in-memory stores; no external services.

use axum::body::Body;
use coords::Stores;
use coords_web::auth::AuthConfig;
use coords_web::router::build_router;
use coords_web::seed::seed_demo_data;
use coords_web::state::AppState;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

const TEST_JWT_SECRET: &[u8] = b"test-secret-for-integration-tests";

// ── Test app builder ───────────────────────────────────────────

fn build_test_app() -> (axum::Router, Stores) {
    let stores = Stores::in_memory();
    let state = AppState::new(
        stores.clone(),
        AuthConfig::from_secret(TEST_JWT_SECRET),
        None,
    );
    (build_router(state), stores)
}

async fn send(
    app: &axum::Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Register a fresh operator and return their session token.
async fn register(app: &axum::Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

// ── Auth ───────────────────────────────────────────────────────

#[tokio::test]
async fn health_and_root_are_public() {
    let (app, _) = build_test_app();

    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "GET", "/api/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Coords API v1.0");
}

#[tokio::test]
async fn register_login_me_flow() {
    let (app, _) = build_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": "ops@example.com", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "ops@example.com");
    // Derived from the email local part.
    assert_eq!(body["user"]["name"], "ops");
    assert!(body["user"].get("password_hash").is_none());

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ops@example.com", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ops@example.com");
    assert_eq!(body["role"], "operator");
    assert_eq!(body["tenant_id"], "default");
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (app, _) = build_test_app();
    register(&app, "ops@example.com").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ops@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let (app, _) = build_test_app();
    register(&app, "ops@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": "ops@example.com", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let (app, _) = build_test_app();

    let (status, _) = send(&app, "GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/coordination/docks", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/auth/me", Some("bogus-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (status, _) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn oauth_exchange_unconfigured_is_503() {
    let (app, _) = build_test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/session",
        None,
        Some(json!({ "session_id": "ext-123" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// ── Docks and carriers ─────────────────────────────────────────

#[tokio::test]
async fn dock_create_carries_a_valid_l1() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (status, dock) = send(
        &app,
        "POST",
        "/api/coordination/docks",
        Some(&token),
        Some(json!({ "name": "Dock North", "lat": 38.8977, "lng": -77.0365 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dock["status"], "available");
    assert_eq!(dock["capacity"], 1);

    let l1 = dock["l1_raw"].as_str().unwrap();
    let parsed = coords::protocol::parse_l1(l1).unwrap();
    assert!(parsed.checksum_valid);
    assert_eq!(parsed.alt, 0.0);

    // The dock's location was recorded alongside it.
    let (status, locations) = send(&app, "GET", "/api/locations", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(locations.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn dock_update_and_status_filtering() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (_, dock) = send(
        &app,
        "POST",
        "/api/coordination/docks",
        Some(&token),
        Some(json!({ "name": "Dock North", "lat": 38.8977, "lng": -77.0365 })),
    )
    .await;
    let dock_id = dock["dock_id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/coordination/docks/{dock_id}"),
        Some(&token),
        Some(json!({ "status": "maintenance", "capacity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "maintenance");
    assert_eq!(updated["capacity"], 2);

    let (_, filtered) = send(
        &app,
        "GET",
        "/api/coordination/docks?status=maintenance",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);

    let (_, filtered) = send(
        &app,
        "GET",
        "/api/coordination/docks?status=available",
        Some(&token),
        None,
    )
    .await;
    assert!(filtered.as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        "GET",
        "/api/coordination/docks/dock_missing0000",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assign_dock_reserves_it_and_rejects_double_booking() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (_, dock) = send(
        &app,
        "POST",
        "/api/coordination/docks",
        Some(&token),
        Some(json!({ "name": "Dock North", "lat": 38.8977, "lng": -77.0365 })),
    )
    .await;
    let (_, carrier) = send(
        &app,
        "POST",
        "/api/carriers",
        Some(&token),
        Some(json!({ "name": "Carrier Alpha", "code": "TRK-001" })),
    )
    .await;
    let dock_id = dock["dock_id"].as_str().unwrap();
    let carrier_id = carrier["carrier_id"].as_str().unwrap();

    let (status, assignment) = send(
        &app,
        "POST",
        "/api/coordination/assign-dock",
        Some(&token),
        Some(json!({ "dock_id": dock_id, "carrier_id": carrier_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assignment["status"], "pending");
    assert_eq!(assignment["dock_id"], dock["dock_id"]);

    let (_, reloaded) = send(
        &app,
        "GET",
        &format!("/api/coordination/docks/{dock_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(reloaded["status"], "reserved");
    assert_eq!(reloaded["assigned_carrier_id"], carrier["carrier_id"]);

    let (_, reloaded_carrier) = send(
        &app,
        "GET",
        &format!("/api/carriers/{carrier_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(reloaded_carrier["destination_dock_id"], dock["dock_id"]);

    let (status, body) = send(
        &app,
        "POST",
        "/api/coordination/assign-dock",
        Some(&token),
        Some(json!({ "dock_id": dock_id, "carrier_id": carrier_id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("reserved"));
}

#[tokio::test]
async fn position_update_recomputes_eta_against_destination() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (_, dock) = send(
        &app,
        "POST",
        "/api/coordination/docks",
        Some(&token),
        Some(json!({ "name": "Dock North", "lat": 38.9072, "lng": -77.0369 })),
    )
    .await;
    let (_, carrier) = send(
        &app,
        "POST",
        "/api/carriers",
        Some(&token),
        Some(json!({ "name": "Carrier Alpha", "code": "TRK-001" })),
    )
    .await;
    let dock_id = dock["dock_id"].as_str().unwrap();
    let carrier_id = carrier["carrier_id"].as_str().unwrap();

    send(
        &app,
        "POST",
        "/api/coordination/assign-dock",
        Some(&token),
        Some(json!({ "dock_id": dock_id, "carrier_id": carrier_id })),
    )
    .await;

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/carriers/{carrier_id}/position"),
        Some(&token),
        Some(json!({ "lat": 38.9150, "lng": -77.0400 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["current_lat"], 38.9150);
    // ~0.91 km away, under a minute at the default speed.
    assert_eq!(updated["distance_km"], 0.91);
    assert_eq!(updated["eta_minutes"], 1);
}

#[tokio::test]
async fn route_plan_estimates_distance_and_updates_carrier() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (_, dock) = send(
        &app,
        "POST",
        "/api/coordination/docks",
        Some(&token),
        // NYC-ish destination from a DC origin
        Some(json!({ "name": "Dock NYC", "lat": 40.7128, "lng": -74.0060 })),
    )
    .await;
    let (_, carrier) = send(
        &app,
        "POST",
        "/api/carriers",
        Some(&token),
        Some(json!({ "name": "Carrier Alpha", "code": "TRK-001" })),
    )
    .await;
    let dock_id = dock["dock_id"].as_str().unwrap();
    let carrier_id = carrier["carrier_id"].as_str().unwrap();

    let (status, plan) = send(
        &app,
        "POST",
        "/api/v1/routing/plan",
        Some(&token),
        Some(json!({
            "carrier_id": carrier_id,
            "origin_lat": 38.9072,
            "origin_lng": -77.0369,
            "destination_dock_id": dock_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let distance = plan["distance_km"].as_f64().unwrap();
    assert!((distance - 327.58).abs() < 1.0, "got {distance}");
    assert_eq!(plan["eta_minutes"], 491);

    let (_, reloaded) = send(
        &app,
        "GET",
        &format!("/api/carriers/{carrier_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(reloaded["destination_dock_id"], dock["dock_id"]);
    assert_eq!(reloaded["distance_km"], plan["distance_km"]);
}

// ── Protocol endpoints (exact wire shapes) ─────────────────────

#[tokio::test]
async fn protocol_generate_matches_reference_vector() {
    let (app, _) = build_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/protocol/generate",
        None,
        Some(json!({ "lat": 37.7749, "lng": -122.4194, "alt": 15.25 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["l1"],
        "coords:l1:v1:37.774900,-122.419400,15.25*1c86401e"
    );
    assert_eq!(body["checksum"], "1c86401e");
    assert_eq!(body["canonical_payload"], "v1|37.774900|-122.419400|15.25");
    assert_eq!(body["lat"], 37.7749);
    assert_eq!(body["lng"], -122.4194);
    assert_eq!(body["alt"], 15.25);
    assert_eq!(body["words"], "oscar.sierra.bravo");
}

#[tokio::test]
async fn protocol_generate_defaults_altitude_to_zero() {
    let (app, _) = build_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/protocol/generate",
        None,
        Some(json!({ "lat": 0.0, "lng": 0.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["l1"], "coords:l1:v1:0.000000,0.000000,0.00*8922cf52");
    assert_eq!(body["alt"], 0.0);
}

#[tokio::test]
async fn protocol_generate_rejects_out_of_range() {
    let (app, _) = build_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/protocol/generate",
        None,
        Some(json!({ "lat": 91.0, "lng": 0.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("out of range"));

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/protocol/generate",
        None,
        Some(json!({ "lat": 0.0, "lng": -180.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn protocol_validate_shapes() {
    let (app, _) = build_test_app();

    // Valid identifier
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/protocol/validate",
        None,
        Some(json!({ "l1_string": "coords:l1:v1:37.774900,-122.419400,15.25*1c86401e" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["lat"], 37.7749);
    assert_eq!(body["altitude"], 15.25);
    assert_eq!(body["checksum"], "1c86401e");
    assert_eq!(body["checksum_valid"], true);

    // Tampered checksum: structurally valid, data invalid
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/protocol/validate",
        None,
        Some(json!({ "l1_string": "coords:l1:v1:37.774900,-122.419400,15.25*deadbeef" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["checksum_valid"], false);

    // Structural failure: valid=false, error set, coordinate fields absent
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/protocol/validate",
        None,
        Some(json!({ "l1_string": "coords:l2:v1:1,2,3*00000000" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert!(body["error"].as_str().unwrap().contains("prefix"));
    assert!(body.get("altitude").is_none());
    assert!(body.get("checksum_valid").is_none());
}

#[tokio::test]
async fn test_vectors_endpoint_is_spec_compliant() {
    let (app, _) = build_test_app();

    let (status, body) = send(&app, "GET", "/api/v1/protocol/test-vectors", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spec_compliant"], true);

    let vectors = body["vectors"].as_array().unwrap();
    assert_eq!(vectors.len(), 4);
    for vector in vectors {
        assert_eq!(vector["checksum_pass"], true);
        assert_eq!(vector["uri_pass"], true);
        assert_eq!(vector["expected_checksum"], vector["actual_checksum"]);
        assert_eq!(vector["expected_uri"], vector["actual_uri"]);
    }
}

// ── Resolution and analytics ───────────────────────────────────

#[tokio::test]
async fn resolve_finds_seeded_handles() {
    let (app, stores) = build_test_app();
    seed_demo_data(&stores).await.unwrap();

    let (status, body) = send(&app, "GET", "/api/v1/resolve/@demo/dock-a1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["handle"], "@demo/dock-a1");
    assert_eq!(body["verified"], true);
    assert_eq!(body["lat"], 38.9072);
    assert_eq!(body["tenant_id"], "default");
    assert!(body["l1_raw"].as_str().unwrap().starts_with("coords:l1:v1:"));

    // The @ prefix is optional on the wire.
    let (_, body) = send(&app, "GET", "/api/v1/resolve/demo/dock-a2", None, None).await;
    assert_eq!(body["handle"], "@demo/dock-a2");
    assert_eq!(body["verified"], true);
}

#[tokio::test]
async fn resolve_reports_unknown_and_malformed_handles() {
    let (app, stores) = build_test_app();
    seed_demo_data(&stores).await.unwrap();

    let (status, body) = send(&app, "GET", "/api/v1/resolve/@demo/nowhere", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verified"], false);
    assert_eq!(body["error"], "handle not found");

    let (_, body) = send(&app, "GET", "/api/v1/resolve/@demo", None, None).await;
    assert_eq!(body["verified"], false);
    assert!(body["error"].as_str().unwrap().contains("tenant/path"));
}

#[tokio::test]
async fn dashboard_reflects_seeded_data() {
    let (app, stores) = build_test_app();
    seed_demo_data(&stores).await.unwrap();
    let token = register(&app, "ops@example.com").await;

    let (status, body) = send(&app, "GET", "/api/v1/analytics/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_docks"], 6);
    assert_eq!(body["available_docks"], 3);
    assert_eq!(body["occupied_docks"], 1);
    assert_eq!(body["pending_arrivals"], 1);
    // 2 enroute + 1 loading
    assert_eq!(body["active_carriers"], 3);
    // (40 + 45 + 50 + 55 + 60 + 65) / 6
    assert_eq!(body["avg_turnaround"], 52.5);
}

#[tokio::test]
async fn sla_compliance_with_no_assignments_is_full() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (status, body) = send(
        &app,
        "GET",
        "/api/v1/analytics/sla-compliance",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_assignments"], 0);
    assert_eq!(body["compliance_rate"], 100.0);
    assert_eq!(body["period"], "all_time");
}

#[tokio::test]
async fn arrival_alert_is_recorded() {
    let (app, _) = build_test_app();
    let token = register(&app, "ops@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/notifications/arrival-alert",
        Some(&token),
        Some(json!({ "carrier_id": "carrier_x", "dock_id": "dock_y" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["notification"]["type"], "arrival_alert");
    assert_eq!(body["notification"]["message"], "Carrier arriving soon");
}

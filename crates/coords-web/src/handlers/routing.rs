//! Route planning endpoint.

use axum::extract::{Extension, Json, State};
use coords::models::{generate_id, utc_now, RoutePlan, RoutePlanRequest};
use coords::routing::{estimate_eta, haversine_km, round_km};
use coords::CoordsError;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// POST /api/v1/routing/plan
pub async fn create_route_plan(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<RoutePlanRequest>,
) -> Result<Json<RoutePlan>, AppError> {
    let dock = state
        .stores
        .docks
        .find(&req.destination_dock_id, &user.tenant_id)
        .await?
        .ok_or_else(|| CoordsError::NotFound("destination dock not found".into()))?;

    let distance = haversine_km(req.origin_lat, req.origin_lng, dock.lat, dock.lng);
    let eta = estimate_eta(distance);

    let plan = RoutePlan {
        route_id: generate_id("route_"),
        carrier_id: req.carrier_id.clone(),
        origin_lat: req.origin_lat,
        origin_lng: req.origin_lng,
        destination_dock_id: dock.dock_id,
        destination_lat: dock.lat,
        destination_lng: dock.lng,
        distance_km: round_km(distance),
        eta_minutes: eta,
        created_at: utc_now(),
    };
    state.stores.route_plans.put(plan.clone()).await?;

    // Point the carrier at the planned route when it exists.
    if let Some(mut carrier) = state
        .stores
        .carriers
        .find(&req.carrier_id, &user.tenant_id)
        .await?
    {
        carrier.destination_dock_id = Some(plan.destination_dock_id.clone());
        carrier.distance_km = Some(plan.distance_km);
        carrier.eta_minutes = Some(plan.eta_minutes);
        carrier.current_lat = Some(req.origin_lat);
        carrier.current_lng = Some(req.origin_lng);
        carrier.updated_at = utc_now();
        state.stores.carriers.put(carrier).await?;
    }

    Ok(Json(plan))
}

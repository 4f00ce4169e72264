//! Carrier endpoints.

use axum::extract::{Extension, Json, Path, Query, State};
use coords::models::{
    generate_id, utc_now, Carrier, CarrierCreate, CarrierPositionUpdate, CarrierStatus,
};
use coords::routing::{estimate_eta, haversine_km, round_km};
use coords::CoordsError;
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CarrierListQuery {
    pub status: Option<CarrierStatus>,
}

/// GET /api/carriers
pub async fn list_carriers(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<CarrierListQuery>,
) -> Result<Json<Vec<Carrier>>, AppError> {
    let carriers = state
        .stores
        .carriers
        .list(&user.tenant_id, query.status)
        .await?;
    Ok(Json(carriers))
}

/// GET /api/carriers/:carrier_id
pub async fn get_carrier(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(carrier_id): Path<String>,
) -> Result<Json<Carrier>, AppError> {
    let carrier = state
        .stores
        .carriers
        .find(&carrier_id, &user.tenant_id)
        .await?
        .ok_or_else(|| CoordsError::NotFound("carrier not found".into()))?;
    Ok(Json(carrier))
}

/// POST /api/carriers
pub async fn create_carrier(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CarrierCreate>,
) -> Result<Json<Carrier>, AppError> {
    let carrier = Carrier {
        carrier_id: generate_id("carrier_"),
        name: req.name,
        code: req.code,
        tenant_id: user.tenant_id,
        status: CarrierStatus::Enroute,
        current_lat: None,
        current_lng: None,
        destination_dock_id: None,
        eta_minutes: None,
        distance_km: None,
        driver_name: req.driver_name,
        driver_phone: req.driver_phone,
        created_at: utc_now(),
        updated_at: utc_now(),
    };
    state.stores.carriers.put(carrier.clone()).await?;
    Ok(Json(carrier))
}

/// PATCH /api/carriers/:carrier_id/position
///
/// Records the new position and, when the carrier has a destination dock,
/// recomputes distance and ETA against it.
pub async fn update_position(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(carrier_id): Path<String>,
    Json(position): Json<CarrierPositionUpdate>,
) -> Result<Json<Carrier>, AppError> {
    let mut carrier = state
        .stores
        .carriers
        .find(&carrier_id, &user.tenant_id)
        .await?
        .ok_or_else(|| CoordsError::NotFound("carrier not found".into()))?;

    carrier.current_lat = Some(position.lat);
    carrier.current_lng = Some(position.lng);
    carrier.updated_at = utc_now();

    if let Some(dock_id) = carrier.destination_dock_id.clone() {
        if let Some(dock) = state.stores.docks.find(&dock_id, &user.tenant_id).await? {
            let distance = haversine_km(position.lat, position.lng, dock.lat, dock.lng);
            carrier.distance_km = Some(round_km(distance));
            carrier.eta_minutes = Some(estimate_eta(distance));
        }
    }

    state.stores.carriers.put(carrier.clone()).await?;
    Ok(Json(carrier))
}

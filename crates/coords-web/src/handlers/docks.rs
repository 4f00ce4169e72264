//! Dock management endpoints.

use axum::extract::{Extension, Json, Path, Query, State};
use coords::models::{
    generate_id, utc_now, AssignDockRequest, AssignmentStatus, Dock, DockAssignment, DockCreate,
    DockStatus, DockUpdate, Location, LocationType,
};
use coords::protocol::generate_l1;
use coords::CoordsError;
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DockListQuery {
    pub status: Option<DockStatus>,
}

/// GET /api/coordination/docks
pub async fn list_docks(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<DockListQuery>,
) -> Result<Json<Vec<Dock>>, AppError> {
    let docks = state.stores.docks.list(&user.tenant_id, query.status).await?;
    Ok(Json(docks))
}

/// GET /api/coordination/docks/:dock_id
pub async fn get_dock(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(dock_id): Path<String>,
) -> Result<Json<Dock>, AppError> {
    let dock = state
        .stores
        .docks
        .find(&dock_id, &user.tenant_id)
        .await?
        .ok_or_else(|| CoordsError::NotFound("dock not found".into()))?;
    Ok(Json(dock))
}

/// POST /api/coordination/docks
///
/// Derives the dock's L1 identifier (altitude 0.0) and records a location
/// entry alongside the dock itself.
pub async fn create_dock(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<DockCreate>,
) -> Result<Json<Dock>, AppError> {
    let l1_raw = generate_l1(req.lat, req.lng, 0.0);

    let location = Location {
        location_id: generate_id("loc_"),
        name: req.name.clone(),
        lat: req.lat,
        lng: req.lng,
        l1_raw: Some(l1_raw.clone()),
        l2_handle: req.l2_handle.clone(),
        tenant_id: user.tenant_id.clone(),
        location_type: LocationType::Dock,
        metadata: serde_json::Value::Object(Default::default()),
        created_at: utc_now(),
    };
    state.stores.locations.put(location.clone()).await?;

    let dock = Dock {
        dock_id: generate_id("dock_"),
        name: req.name,
        location_id: location.location_id,
        tenant_id: user.tenant_id.clone(),
        status: DockStatus::Available,
        assigned_carrier_id: None,
        capacity: req.capacity,
        lat: req.lat,
        lng: req.lng,
        l1_raw: Some(l1_raw),
        l2_handle: req.l2_handle,
        last_activity: None,
        turnaround_avg_mins: 45.0,
        created_at: utc_now(),
        updated_at: utc_now(),
    };
    state.stores.docks.put(dock.clone()).await?;

    tracing::info!(dock_id = %dock.dock_id, tenant = %dock.tenant_id, "dock created");
    Ok(Json(dock))
}

/// PATCH /api/coordination/docks/:dock_id
pub async fn update_dock(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(dock_id): Path<String>,
    Json(update): Json<DockUpdate>,
) -> Result<Json<Dock>, AppError> {
    let mut dock = state
        .stores
        .docks
        .find(&dock_id, &user.tenant_id)
        .await?
        .ok_or_else(|| CoordsError::NotFound("dock not found".into()))?;

    if let Some(name) = update.name {
        dock.name = name;
    }
    if let Some(status) = update.status {
        dock.status = status;
    }
    if let Some(capacity) = update.capacity {
        dock.capacity = capacity;
    }
    dock.updated_at = utc_now();

    state.stores.docks.put(dock.clone()).await?;
    Ok(Json(dock))
}

/// POST /api/coordination/assign-dock
pub async fn assign_dock(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<AssignDockRequest>,
) -> Result<Json<DockAssignment>, AppError> {
    let mut dock = state
        .stores
        .docks
        .find(&req.dock_id, &user.tenant_id)
        .await?
        .ok_or_else(|| CoordsError::NotFound("dock not found".into()))?;

    if dock.status != DockStatus::Available {
        return Err(CoordsError::InvalidInput(format!("dock is {}", dock.status)).into());
    }

    let mut carrier = state
        .stores
        .carriers
        .find(&req.carrier_id, &user.tenant_id)
        .await?
        .ok_or_else(|| CoordsError::NotFound("carrier not found".into()))?;

    let assignment = DockAssignment {
        assignment_id: generate_id("assign_"),
        dock_id: dock.dock_id.clone(),
        carrier_id: carrier.carrier_id.clone(),
        tenant_id: user.tenant_id.clone(),
        assigned_by: user.user_id,
        assigned_at: utc_now(),
        expected_arrival: req.expected_arrival,
        actual_arrival: None,
        departure_time: None,
        sla_deadline: req.sla_deadline,
        status: AssignmentStatus::Pending,
    };
    state.stores.assignments.put(assignment.clone()).await?;

    dock.status = DockStatus::Reserved;
    dock.assigned_carrier_id = Some(carrier.carrier_id.clone());
    dock.updated_at = utc_now();
    state.stores.docks.put(dock).await?;

    carrier.destination_dock_id = Some(assignment.dock_id.clone());
    carrier.updated_at = utc_now();
    state.stores.carriers.put(carrier).await?;

    tracing::info!(
        assignment_id = %assignment.assignment_id,
        dock_id = %assignment.dock_id,
        carrier_id = %assignment.carrier_id,
        "dock assigned"
    );
    Ok(Json(assignment))
}

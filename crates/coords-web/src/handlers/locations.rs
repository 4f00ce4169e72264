//! Location endpoints.

use axum::extract::{Extension, Json, State};
use coords::models::{generate_id, utc_now, Location, LocationCreate};
use coords::protocol::generate_l1;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// GET /api/locations
pub async fn list_locations(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Location>>, AppError> {
    let locations = state.stores.locations.list(&user.tenant_id).await?;
    Ok(Json(locations))
}

/// POST /api/locations
pub async fn create_location(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<LocationCreate>,
) -> Result<Json<Location>, AppError> {
    let location = Location {
        location_id: generate_id("loc_"),
        name: req.name,
        lat: req.lat,
        lng: req.lng,
        l1_raw: Some(generate_l1(req.lat, req.lng, 0.0)),
        l2_handle: req.l2_handle,
        tenant_id: user.tenant_id,
        location_type: req.location_type,
        metadata: req.metadata,
        created_at: utc_now(),
    };
    state.stores.locations.put(location.clone()).await?;
    Ok(Json(location))
}

//! L2 handle resolution.
//!
//! The codec only parses the handle; mapping it to coordinates is a keyed
//! lookup against the location store, with docks as a fallback.

use axum::extract::{Json, Path, State};
use coords::models::L2ResolveResponse;
use coords::protocol::parse_l2_handle;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/v1/resolve/*handle
pub async fn resolve_l2(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<L2ResolveResponse>, AppError> {
    let handle = if handle.starts_with('@') {
        handle
    } else {
        format!("@{handle}")
    };

    if let Err(err) = parse_l2_handle(&handle) {
        return Ok(Json(L2ResolveResponse::error(handle, err.to_string())));
    }

    if let Some(location) = state.stores.locations.find_by_handle(&handle).await? {
        return Ok(Json(L2ResolveResponse {
            handle,
            l1_raw: location.l1_raw,
            lat: Some(location.lat),
            lng: Some(location.lng),
            tenant_id: Some(location.tenant_id),
            verified: true,
            error: None,
        }));
    }

    if let Some(dock) = state.stores.docks.find_by_handle(&handle).await? {
        return Ok(Json(L2ResolveResponse {
            handle,
            l1_raw: dock.l1_raw,
            lat: Some(dock.lat),
            lng: Some(dock.lng),
            tenant_id: Some(dock.tenant_id),
            verified: true,
            error: None,
        }));
    }

    Ok(Json(L2ResolveResponse::error(handle, "handle not found")))
}

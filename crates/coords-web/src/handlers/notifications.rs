//! Arrival notifications. Delivery is a stub; the record is persisted and
//! echoed back.

use axum::extract::{Extension, Json, State};
use coords::models::{generate_id, utc_now, Notification};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

fn default_message() -> String {
    "Carrier arriving soon".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ArrivalAlertRequest {
    #[serde(default)]
    pub carrier_id: Option<String>,
    #[serde(default)]
    pub dock_id: Option<String>,
    #[serde(default = "default_message")]
    pub message: String,
}

/// POST /api/v1/notifications/arrival-alert
pub async fn arrival_alert(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<ArrivalAlertRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let notification = Notification {
        notification_id: generate_id("notif_"),
        kind: "arrival_alert".into(),
        carrier_id: req.carrier_id,
        dock_id: req.dock_id,
        message: req.message,
        sent_at: utc_now(),
        sent_by: user.user_id,
    };
    state.stores.notifications.put(notification.clone()).await?;

    Ok(Json(json!({ "success": true, "notification": notification })))
}

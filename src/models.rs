//! Domain models: tenant-scoped, timestamped, serde-faced.
//!
//! Entities have no identity beyond their id string; updates go through
//! whole-record puts in the store layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short prefixed id, e.g. `dock_3f2a91c04b7e`.
pub fn generate_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", &hex[..12])
}

pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    OrgAdmin,
    Operator,
    CarrierViewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DockStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl std::fmt::Display for DockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Reserved => "reserved",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierStatus {
    Enroute,
    Arrived,
    Loading,
    Departed,
    Delayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Warehouse,
    Dock,
    Checkpoint,
    Custom,
}

impl Default for LocationType {
    fn default() -> Self {
        Self::Custom
    }
}

// =============================================================================
// AUTH MODELS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub role: UserRole,
    pub tenant_id: String,
    /// Salted digest; never serialized outward.
    #[serde(default, skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// SPATIAL / LOCATION MODELS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub location_id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub l1_raw: Option<String>,
    pub l2_handle: Option<String>,
    pub tenant_id: String,
    pub location_type: LocationType,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct LocationCreate {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_location_name")]
    pub name: String,
    #[serde(default, rename = "type")]
    pub location_type: LocationType,
    #[serde(default)]
    pub l2_handle: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

fn default_location_name() -> String {
    "Unnamed Location".to_string()
}

// =============================================================================
// DOCK MODELS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dock {
    pub dock_id: String,
    pub name: String,
    pub location_id: String,
    pub tenant_id: String,
    pub status: DockStatus,
    pub assigned_carrier_id: Option<String>,
    pub capacity: i32,
    pub lat: f64,
    pub lng: f64,
    pub l1_raw: Option<String>,
    pub l2_handle: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
    pub turnaround_avg_mins: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct DockCreate {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    #[serde(default)]
    pub l2_handle: Option<String>,
}

fn default_capacity() -> i32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct DockUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<DockStatus>,
    #[serde(default)]
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockAssignment {
    pub assignment_id: String,
    pub dock_id: String,
    pub carrier_id: String,
    pub tenant_id: String,
    /// user_id of the operator who made the assignment.
    pub assigned_by: String,
    pub assigned_at: DateTime<Utc>,
    pub expected_arrival: Option<DateTime<Utc>>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub sla_deadline: Option<DateTime<Utc>>,
    pub status: AssignmentStatus,
}

#[derive(Debug, Deserialize)]
pub struct AssignDockRequest {
    pub dock_id: String,
    pub carrier_id: String,
    #[serde(default)]
    pub expected_arrival: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sla_deadline: Option<DateTime<Utc>>,
}

// =============================================================================
// CARRIER MODELS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrier {
    pub carrier_id: String,
    pub name: String,
    /// e.g. "TRK-001".
    pub code: String,
    pub tenant_id: String,
    pub status: CarrierStatus,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    pub destination_dock_id: Option<String>,
    pub eta_minutes: Option<i64>,
    pub distance_km: Option<f64>,
    pub driver_name: Option<String>,
    pub driver_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CarrierCreate {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub driver_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CarrierPositionUpdate {
    pub lat: f64,
    pub lng: f64,
}

// =============================================================================
// ROUTING MODELS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    pub route_id: String,
    pub carrier_id: String,
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub destination_dock_id: String,
    pub destination_lat: f64,
    pub destination_lng: f64,
    pub distance_km: f64,
    pub eta_minutes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RoutePlanRequest {
    pub carrier_id: String,
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub destination_dock_id: String,
}

// =============================================================================
// NOTIFICATION MODELS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub carrier_id: Option<String>,
    pub dock_id: Option<String>,
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub sent_by: String,
}

// =============================================================================
// ANALYTICS MODELS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_docks: usize,
    pub available_docks: usize,
    pub occupied_docks: usize,
    pub active_carriers: usize,
    pub sla_compliance: f64,
    pub avg_turnaround: f64,
    pub pending_arrivals: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlaComplianceReport {
    pub total_assignments: usize,
    pub on_time_arrivals: usize,
    pub late_arrivals: usize,
    pub compliance_rate: f64,
    pub period: String,
}

// =============================================================================
// PROTOCOL VALIDATION MODELS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct L1ValidationRequest {
    pub l1_string: String,
}

/// Exact field names are wire compatibility; absent fields are omitted, not
/// null (e.g. `altitude` is absent on structural failure).
#[derive(Debug, Serialize)]
pub struct L1ValidationResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub alt: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub l1: String,
    pub checksum: String,
    pub canonical_payload: String,
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
    pub words: String,
}

#[derive(Debug, Serialize)]
pub struct L2ResolveResponse {
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l1_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl L2ResolveResponse {
    /// Error-shaped response: handle echoed back, nothing resolved.
    pub fn error(handle: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            l1_raw: None,
            lat: None,
            lng: None,
            tenant_id: None,
            verified: false,
            error: Some(error.into()),
        }
    }
}

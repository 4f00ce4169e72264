//! Store port traits.
//!
//! Persistence-backed collections behind `Arc<dyn Trait>` so the same
//! handler logic works against the in-memory store or a test double.
//! Semantics are deliberately thin: store what was given, fetch it back;
//! updates are whole-record puts.

use async_trait::async_trait;

use crate::error::CoordsError;
use crate::models::{
    Carrier, CarrierStatus, Dock, DockAssignment, DockStatus, Location, Notification, RoutePlan,
    Session, User,
};

pub type StoreResult<T> = Result<T, CoordsError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn put(&self, user: User) -> StoreResult<()>;
    async fn find_by_id(&self, user_id: &str) -> StoreResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, session: Session) -> StoreResult<()>;
    async fn find_by_token(&self, session_token: &str) -> StoreResult<Option<Session>>;
    async fn delete_by_token(&self, session_token: &str) -> StoreResult<()>;
}

#[async_trait]
pub trait DockStore: Send + Sync {
    async fn put(&self, dock: Dock) -> StoreResult<()>;
    async fn find(&self, dock_id: &str, tenant_id: &str) -> StoreResult<Option<Dock>>;
    /// Cross-tenant lookup used by L2 handle resolution.
    async fn find_by_handle(&self, l2_handle: &str) -> StoreResult<Option<Dock>>;
    async fn list(
        &self,
        tenant_id: &str,
        status: Option<DockStatus>,
    ) -> StoreResult<Vec<Dock>>;
}

#[async_trait]
pub trait CarrierStore: Send + Sync {
    async fn put(&self, carrier: Carrier) -> StoreResult<()>;
    async fn find(&self, carrier_id: &str, tenant_id: &str) -> StoreResult<Option<Carrier>>;
    async fn list(
        &self,
        tenant_id: &str,
        status: Option<CarrierStatus>,
    ) -> StoreResult<Vec<Carrier>>;
}

#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn put(&self, location: Location) -> StoreResult<()>;
    /// Cross-tenant lookup by exact handle string.
    async fn find_by_handle(&self, l2_handle: &str) -> StoreResult<Option<Location>>;
    async fn list(&self, tenant_id: &str) -> StoreResult<Vec<Location>>;
}

#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn put(&self, assignment: DockAssignment) -> StoreResult<()>;
    async fn list(&self, tenant_id: &str) -> StoreResult<Vec<DockAssignment>>;
}

#[async_trait]
pub trait RoutePlanStore: Send + Sync {
    async fn put(&self, plan: RoutePlan) -> StoreResult<()>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn put(&self, notification: Notification) -> StoreResult<()>;
}

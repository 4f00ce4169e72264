//! In-memory store: every port over a `RwLock<BTreeMap>`.
//!
//! BTreeMap keys keep listings in stable id order. Nothing here outlives
//! the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{
    Carrier, CarrierStatus, Dock, DockAssignment, DockStatus, Location, Notification, RoutePlan,
    Session, User,
};
use crate::ports::{
    AssignmentStore, CarrierStore, DockStore, LocationStore, NotificationStore, RoutePlanStore,
    SessionStore, StoreResult, UserStore,
};

#[derive(Default)]
pub struct MemUserStore {
    inner: RwLock<BTreeMap<String, User>>,
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn put(&self, user: User) -> StoreResult<()> {
        self.inner.write().await.insert(user.user_id.clone(), user);
        Ok(())
    }

    async fn find_by_id(&self, user_id: &str) -> StoreResult<Option<User>> {
        Ok(self.inner.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct MemSessionStore {
    inner: RwLock<BTreeMap<String, Session>>,
}

#[async_trait]
impl SessionStore for MemSessionStore {
    async fn put(&self, session: Session) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .insert(session.session_token.clone(), session);
        Ok(())
    }

    async fn find_by_token(&self, session_token: &str) -> StoreResult<Option<Session>> {
        Ok(self.inner.read().await.get(session_token).cloned())
    }

    async fn delete_by_token(&self, session_token: &str) -> StoreResult<()> {
        self.inner.write().await.remove(session_token);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemDockStore {
    inner: RwLock<BTreeMap<String, Dock>>,
}

#[async_trait]
impl DockStore for MemDockStore {
    async fn put(&self, dock: Dock) -> StoreResult<()> {
        self.inner.write().await.insert(dock.dock_id.clone(), dock);
        Ok(())
    }

    async fn find(&self, dock_id: &str, tenant_id: &str) -> StoreResult<Option<Dock>> {
        Ok(self
            .inner
            .read()
            .await
            .get(dock_id)
            .filter(|d| d.tenant_id == tenant_id)
            .cloned())
    }

    async fn find_by_handle(&self, l2_handle: &str) -> StoreResult<Option<Dock>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .find(|d| d.l2_handle.as_deref() == Some(l2_handle))
            .cloned())
    }

    async fn list(
        &self,
        tenant_id: &str,
        status: Option<DockStatus>,
    ) -> StoreResult<Vec<Dock>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .filter(|d| d.tenant_id == tenant_id)
            .filter(|d| status.map_or(true, |s| d.status == s))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemCarrierStore {
    inner: RwLock<BTreeMap<String, Carrier>>,
}

#[async_trait]
impl CarrierStore for MemCarrierStore {
    async fn put(&self, carrier: Carrier) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .insert(carrier.carrier_id.clone(), carrier);
        Ok(())
    }

    async fn find(&self, carrier_id: &str, tenant_id: &str) -> StoreResult<Option<Carrier>> {
        Ok(self
            .inner
            .read()
            .await
            .get(carrier_id)
            .filter(|c| c.tenant_id == tenant_id)
            .cloned())
    }

    async fn list(
        &self,
        tenant_id: &str,
        status: Option<CarrierStatus>,
    ) -> StoreResult<Vec<Carrier>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .filter(|c| c.tenant_id == tenant_id)
            .filter(|c| status.map_or(true, |s| c.status == s))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemLocationStore {
    inner: RwLock<BTreeMap<String, Location>>,
}

#[async_trait]
impl LocationStore for MemLocationStore {
    async fn put(&self, location: Location) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .insert(location.location_id.clone(), location);
        Ok(())
    }

    async fn find_by_handle(&self, l2_handle: &str) -> StoreResult<Option<Location>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .find(|l| l.l2_handle.as_deref() == Some(l2_handle))
            .cloned())
    }

    async fn list(&self, tenant_id: &str) -> StoreResult<Vec<Location>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .filter(|l| l.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemAssignmentStore {
    inner: RwLock<BTreeMap<String, DockAssignment>>,
}

#[async_trait]
impl AssignmentStore for MemAssignmentStore {
    async fn put(&self, assignment: DockAssignment) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .insert(assignment.assignment_id.clone(), assignment);
        Ok(())
    }

    async fn list(&self, tenant_id: &str) -> StoreResult<Vec<DockAssignment>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .filter(|a| a.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemRoutePlanStore {
    inner: RwLock<BTreeMap<String, RoutePlan>>,
}

#[async_trait]
impl RoutePlanStore for MemRoutePlanStore {
    async fn put(&self, plan: RoutePlan) -> StoreResult<()> {
        self.inner.write().await.insert(plan.route_id.clone(), plan);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemNotificationStore {
    inner: RwLock<BTreeMap<String, Notification>>,
}

#[async_trait]
impl NotificationStore for MemNotificationStore {
    async fn put(&self, notification: Notification) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .insert(notification.notification_id.clone(), notification);
        Ok(())
    }
}

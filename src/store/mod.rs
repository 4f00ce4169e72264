//! Store implementations and the aggregate handed to the server.

pub mod memory;

use std::sync::Arc;

use crate::ports::{
    AssignmentStore, CarrierStore, DockStore, LocationStore, NotificationStore, RoutePlanStore,
    SessionStore, UserStore,
};

pub use memory::{
    MemAssignmentStore, MemCarrierStore, MemDockStore, MemLocationStore, MemNotificationStore,
    MemRoutePlanStore, MemSessionStore, MemUserStore,
};

/// One handle per collection, shared across handlers.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub docks: Arc<dyn DockStore>,
    pub carriers: Arc<dyn CarrierStore>,
    pub locations: Arc<dyn LocationStore>,
    pub assignments: Arc<dyn AssignmentStore>,
    pub route_plans: Arc<dyn RoutePlanStore>,
    pub notifications: Arc<dyn NotificationStore>,
}

impl Stores {
    /// Fresh in-memory store set.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemUserStore::default()),
            sessions: Arc::new(MemSessionStore::default()),
            docks: Arc::new(MemDockStore::default()),
            carriers: Arc::new(MemCarrierStore::default()),
            locations: Arc::new(MemLocationStore::default()),
            assignments: Arc::new(MemAssignmentStore::default()),
            route_plans: Arc::new(MemRoutePlanStore::default()),
            notifications: Arc::new(MemNotificationStore::default()),
        }
    }
}

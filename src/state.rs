//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::db::DbHandle;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap; the connection handle is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// The lazily-connected database handle, exposed for handlers that
    /// need a readiness check without running a query
    pub db: Arc<DbHandle>,
}

impl AppState {
    /// Creates a new AppState from a database handle.
    ///
    /// Initializes all repositories and services from the provided handle.
    /// No connection is established here; the first request that needs the
    /// database triggers the connect.
    pub fn new(db: Arc<DbHandle>) -> Self {
        let repos = Repositories::new(db.clone());
        let services = Services::new(repos);
        Self { services, db }
    }
}

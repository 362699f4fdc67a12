//! Repository layer for data access operations.
//!
//! Provides async CRUD operations on the persisted collection.

mod user_repo;

pub use user_repo::UserRepository;

use std::sync::Arc;

use crate::db::DbHandle;

/// Aggregates all repositories for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the connection handle is behind an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `db` - The shared database connection handle
    pub fn new(db: Arc<DbHandle>) -> Self {
        Self {
            users: UserRepository::new(db),
        }
    }
}

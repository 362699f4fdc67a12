//! User service for business logic operations.
//!
//! Provides a higher-level API for user operations, encapsulating
//! business rules and coordinating with the repository layer.

use mongodb::bson::oid::ObjectId;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserRepository;

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Creates a new UserService with the given repository.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Creates a new user.
    ///
    /// # Returns
    /// The id generated by the storage layer
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<ObjectId> {
        self.repo.create(new_user).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    /// Replaces a user's fields.
    ///
    /// A nonexistent id is a no-op; callers observe the outcome through the
    /// idempotent redirect to the list page.
    pub async fn update_user(&self, id: &str, update: UpdateUser) -> AppResult<()> {
        self.repo.update_by_id(id, update).await
    }

    /// Deletes a user. Deleting an absent id is a no-op, so the operation
    /// is idempotent.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.repo.delete_by_id(id).await
    }
}

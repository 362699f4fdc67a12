//! User repository for async document operations.
//!
//! Provides CRUD operations on the `users` collection. Every operation
//! acquires the shared connection through `DbHandle`, establishing it
//! lazily on first use.

use std::sync::Arc;

use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::Collection;

use crate::db::DbHandle;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{NewUser, UpdateUser, User};

/// Name of the single collection this application persists to
const USERS_COLLECTION: &str = "users";

/// User repository holding the shared connection handle.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<DbHandle>,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection handle.
    pub fn new(db: Arc<DbHandle>) -> Self {
        Self { db }
    }

    /// Creates a new user document.
    ///
    /// The controller validates input first; the repository still rejects
    /// empty required fields so no malformed write can reach the store.
    ///
    /// # Returns
    /// The id generated by the storage layer
    pub async fn create(&self, new_user: NewUser) -> AppResult<ObjectId> {
        if new_user.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if new_user.email.trim().is_empty() {
            return Err(AppError::missing_field("email"));
        }

        let collection = self.collection().await?.clone_with_type::<NewUser>();
        let result = collection
            .insert_one(&new_user)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "create user"))?;

        result.inserted_id.as_object_id().ok_or_else(|| AppError::Internal {
            source: anyhow::anyhow!("storage layer returned a non-ObjectId insert id"),
        })
    }

    /// Lists all user documents. Order is unspecified.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .await?
            .find(doc! {})
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "list users"))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "list users"))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let oid = Self::parse_id(id)?;
        self.collection()
            .await?
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "find user by id"))
    }

    /// Replaces `name`, `email`, and `image` on the matching document.
    ///
    /// A non-matching id is a no-op, not an error.
    pub async fn update_by_id(&self, id: &str, update: UpdateUser) -> AppResult<()> {
        if update.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if update.email.trim().is_empty() {
            return Err(AppError::missing_field("email"));
        }

        let oid = Self::parse_id(id)?;
        let fields = bson::to_document(&update).map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })?;

        self.collection()
            .await?
            .update_one(doc! { "_id": oid }, doc! { "$set": fields })
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "update user"))?;

        Ok(())
    }

    /// Removes the matching document. A non-matching id is a no-op.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let oid = Self::parse_id(id)?;
        self.collection()
            .await?
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "delete user"))?;

        Ok(())
    }

    async fn collection(&self) -> AppResult<Collection<User>> {
        Ok(self.db.database().await?.collection(USERS_COLLECTION))
    }

    /// Parses a path id into an ObjectId.
    ///
    /// A malformed id is a query failure: the identifier cannot address any
    /// document in this storage backend.
    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|e| AppError::Query {
            operation: format!("parse id '{}'", id),
            source: anyhow::Error::from(e),
        })
    }
}

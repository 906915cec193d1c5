//! Storage Module
//!
//! Persistence seam for users (credential store) and posts (post store).
//! Handlers only talk to [`Storage`]; every call acquires and releases the
//! backend's handle on its own, so nothing is held across an `.await` in a
//! handler.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Post, User};

pub use memory::InMemoryStorage;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A post was written for a user id that does not exist
    #[error("owner {0} does not exist")]
    UnknownOwner(i64),
}

/// Credential and post persistence.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Inserts a user, assigning a fresh id. Emails are not required to be
    /// unique.
    async fn create_user(&self, email: &str, password: &str) -> Result<User, StorageError>;

    /// First user registered under `email`.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Inserts a post owned by `owner_id`, assigning a fresh id.
    async fn create_post(&self, owner_id: i64, text: &str) -> Result<Post, StorageError>;

    /// All posts owned by `owner_id`, in creation order.
    async fn list_posts_by_owner(&self, owner_id: i64) -> Result<Vec<Post>, StorageError>;

    /// Deletes `post_id` if it exists and belongs to `owner_id`. Returns
    /// whether a post was removed.
    async fn delete_post_owned_by(&self, post_id: i64, owner_id: i64)
        -> Result<bool, StorageError>;
}

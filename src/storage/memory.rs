//! In-memory storage backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Storage, StorageError};
use crate::models::{Post, User};

#[derive(Debug)]
struct Tables {
    users: BTreeMap<i64, User>,
    posts: BTreeMap<i64, Post>,
    next_user_id: i64,
    next_post_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            posts: BTreeMap::new(),
            next_user_id: 1,
            next_post_id: 1,
        }
    }
}

/// Process-local store. Ids are sequential per table, starting at 1, and are
/// never reused after a delete.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    tables: RwLock<Tables>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, email: &str, password: &str) -> Result<User, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_user_id;
        tables.next_user_id += 1;

        let user = User {
            id,
            email: email.to_string(),
            password: password.to_string(),
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_post(&self, owner_id: i64, text: &str) -> Result<Post, StorageError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&owner_id) {
            return Err(StorageError::UnknownOwner(owner_id));
        }

        let id = tables.next_post_id;
        tables.next_post_id += 1;

        let post = Post {
            id,
            text: text.to_string(),
            owner_id,
        };
        tables.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn list_posts_by_owner(&self, owner_id: i64) -> Result<Vec<Post>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete_post_owned_by(
        &self,
        post_id: i64,
        owner_id: i64,
    ) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .posts
            .get(&post_id)
            .is_some_and(|post| post.owner_id == owner_id);
        if owned {
            tables.posts.remove(&post_id);
        }
        Ok(owned)
    }
}

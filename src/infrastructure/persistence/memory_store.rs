//! In-process store implementation for tests and demos.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, User};
use crate::domain::store::{LinkMap, Store};
use crate::error::AppError;

/// A [`Store`] backed by in-process maps.
///
/// Durability is a non-feature here; everything is gone when the process
/// exits. Used by the test suite and anywhere a throwaway registry is
/// needed without touching disk.
#[derive(Default)]
pub struct MemoryStore {
    links: RwLock<LinkMap>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_link(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(short_id).cloned())
    }

    async fn put_link(&self, short_id: &str, link: Link) -> Result<(), AppError> {
        self.links.write().await.insert(short_id.to_string(), link);
        Ok(())
    }

    async fn delete_link(&self, short_id: &str) -> Result<bool, AppError> {
        Ok(self.links.write().await.remove(short_id).is_some())
    }

    async fn load_links(&self) -> Result<LinkMap, AppError> {
        Ok(self.links.read().await.clone())
    }

    async fn load_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn save_users(&self, users: &[User]) -> Result<(), AppError> {
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}

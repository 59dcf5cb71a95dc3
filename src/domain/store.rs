//! Persistence contract for the two stored collections.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{Link, User};
use crate::error::AppError;

/// The links collection: a mapping from short id to [`Link`] record.
pub type LinkMap = HashMap<String, Link>;

/// Storage interface over the two persisted collections (users and links).
///
/// Implementations address records by string keys and must survive process
/// restarts on the same medium. The trait deliberately offers no atomic
/// read-modify-write: callers that mutate (registry, recorder) serialize
/// their round-trips through a single write lock, because two concurrent
/// mutations that each read the same stale snapshot would silently lose one
/// update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - two JSON blobs on disk
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process map for tests and demos
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetches a single link by short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the medium fails.
    async fn get_link(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Inserts or replaces the link stored under `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the medium fails.
    async fn put_link(&self, short_id: &str, link: Link) -> Result<(), AppError>;

    /// Removes a link. Returns `true` when a record was actually removed,
    /// `false` when the key was already absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the medium fails.
    async fn delete_link(&self, short_id: &str) -> Result<bool, AppError>;

    /// Loads the whole links collection.
    ///
    /// Iteration order of the returned map carries no guarantee; callers
    /// needing an order sort explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the medium fails.
    async fn load_links(&self) -> Result<LinkMap, AppError>;

    /// Loads the users collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the medium fails.
    async fn load_users(&self) -> Result<Vec<User>, AppError>;

    /// Replaces the users collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the medium fails.
    async fn save_users(&self, users: &[User]) -> Result<(), AppError>;
}

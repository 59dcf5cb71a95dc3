//! File-backed store implementation.
//!
//! Persists the two collections as UTF-8 JSON blobs (`links.json`,
//! `users.json`) under a data directory. Every operation is a whole-blob
//! read or write; mutation callers serialize their round-trips through the
//! registry's write lock, so no finer-grained locking happens here.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Link, User};
use crate::domain::store::{LinkMap, Store};
use crate::error::AppError;

const LINKS_FILE: &str = "links.json";
const USERS_FILE: &str = "users.json";

/// A [`Store`] backed by two JSON files on disk.
///
/// A missing file reads as an empty collection (version-0 semantics: no
/// schema version field exists; its absence is treated as version 0). Writes
/// go to a temp file first and are renamed into place, so readers never see
/// a half-written blob.
pub struct JsonFileStore {
    links_path: PathBuf,
    users_path: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the directory cannot be
    /// created.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(AppError::store_unavailable)?;

        Ok(Self {
            links_path: data_dir.join(LINKS_FILE),
            users_path: data_dir.join(USERS_FILE),
        })
    }

    async fn read_blob<T: DeserializeOwned + Default>(path: &Path) -> Result<T, AppError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(AppError::store_unavailable),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(AppError::store_unavailable(e)),
        }
    }

    async fn write_blob<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(value).map_err(AppError::store_unavailable)?;

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(AppError::store_unavailable)?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(AppError::store_unavailable)?;

        Ok(())
    }

    async fn read_links(&self) -> Result<LinkMap, AppError> {
        let mut links: LinkMap = Self::read_blob(&self.links_path).await?;

        // Version-0 records predate the embedded short id; backfill it from
        // the collection key.
        for (short_id, link) in links.iter_mut() {
            if link.short_id.is_empty() {
                link.short_id = short_id.clone();
            }
        }

        Ok(links)
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn get_link(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.read_links().await?;
        Ok(links.remove(short_id))
    }

    async fn put_link(&self, short_id: &str, link: Link) -> Result<(), AppError> {
        let mut links = self.read_links().await?;
        links.insert(short_id.to_string(), link);
        Self::write_blob(&self.links_path, &links).await
    }

    async fn delete_link(&self, short_id: &str) -> Result<bool, AppError> {
        let mut links = self.read_links().await?;
        let removed = links.remove(short_id).is_some();
        if removed {
            Self::write_blob(&self.links_path, &links).await?;
        }
        Ok(removed)
    }

    async fn load_links(&self) -> Result<LinkMap, AppError> {
        self.read_links().await
    }

    async fn load_users(&self) -> Result<Vec<User>, AppError> {
        Self::read_blob(&self.users_path).await
    }

    async fn save_users(&self, users: &[User]) -> Result<(), AppError> {
        Self::write_blob(&self.users_path, &users.to_vec()).await
    }
}

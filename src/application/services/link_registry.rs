//! Link registry: CRUD over short links with ownership enforcement.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{ClickEvent, Link};
use crate::domain::store::{LinkMap, Store};
use crate::error::AppError;
use crate::utils::code_generator::generate_short_id;
use crate::utils::url_normalizer::normalize_destination;

/// Attempts at allocating a non-colliding short id before giving up.
const MAX_ID_ATTEMPTS: usize = 10;

/// Service owning the links collection.
///
/// All mutating operations (create, delete, click append, qr-export bump)
/// run under a single per-process write lock. The store only offers
/// whole-record get/put round-trips, so two concurrent mutations reading the
/// same stale snapshot would otherwise silently lose one update.
pub struct LinkRegistry<S: Store> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: Store> LinkRegistry<S> {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Registers a new short link for `owner_id`.
    ///
    /// The destination gets a default `https://` scheme when none is present
    /// and must parse as an absolute http(s) URL. A unique short id is
    /// allocated with a bounded retry loop; a collision never overwrites an
    /// existing link.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidDestination`] for a malformed destination
    /// - [`AppError::CapacityExhausted`] when id allocation keeps colliding
    /// - [`AppError::StoreUnavailable`] on storage failure
    pub async fn create(&self, destination_url: &str, owner_id: &str) -> Result<Link, AppError> {
        let normalized = normalize_destination(destination_url)?;

        let _guard = self.write_lock.lock().await;

        let short_id = self.allocate_short_id().await?;
        let link = Link::new(
            short_id.clone(),
            normalized,
            owner_id.to_string(),
            Utc::now(),
        );
        self.store.put_link(&short_id, link.clone()).await?;

        tracing::info!(short_id = %short_id, owner_id = %owner_id, "short link created");
        Ok(link)
    }

    /// Resolves a short id to its link. Owner-agnostic and read-only; this
    /// is the sole lookup path used by the redirect flow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link exists under the id.
    pub async fn resolve(&self, short_id: &str) -> Result<Link, AppError> {
        self.store
            .get_link(short_id)
            .await?
            .ok_or_else(|| AppError::not_found(short_id))
    }

    /// Lists every link belonging to `owner_id`.
    ///
    /// No ordering guarantee; callers wanting a stable order sort by
    /// `created_at` themselves.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        let links = self.store.load_links().await?;
        Ok(links
            .into_values()
            .filter(|link| link.is_owned_by(owner_id))
            .collect())
    }

    /// Deletes a link and its entire history, irreversibly.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] when the id is absent (a concurrent delete
    ///   that lost the race sees this, never a second "removed" success)
    /// - [`AppError::Forbidden`] when `requesting_owner_id` does not own the
    ///   link; the link is left untouched
    pub async fn delete(&self, short_id: &str, requesting_owner_id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let link = self
            .store
            .get_link(short_id)
            .await?
            .ok_or_else(|| AppError::not_found(short_id))?;

        if !link.is_owned_by(requesting_owner_id) {
            tracing::warn!(short_id = %short_id, "delete refused for non-owner");
            return Err(AppError::Forbidden);
        }

        self.store.delete_link(short_id).await?;
        tracing::info!(short_id = %short_id, "short link deleted");
        Ok(())
    }

    /// Bumps the QR export counter for a link.
    ///
    /// Best-effort by design: an absent id is a silent no-op, never an
    /// error. Called by the QR-export collaborator after rendering.
    pub async fn increment_qr_export(&self, short_id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut link) = self.store.get_link(short_id).await? else {
            tracing::debug!(short_id = %short_id, "qr export bump for unknown id ignored");
            return Ok(());
        };

        link.qr_export_count += 1;
        self.store.put_link(short_id, link).await
    }

    /// Appends a click event and bumps the click counter as one atomic
    /// read-modify-write, preserving `click_count == history.len()`.
    ///
    /// Only the click recorder calls this.
    pub(crate) async fn append_click(
        &self,
        short_id: &str,
        event: ClickEvent,
    ) -> Result<Link, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut link = self
            .store
            .get_link(short_id)
            .await?
            .ok_or_else(|| AppError::not_found(short_id))?;

        link.history.push(event);
        link.click_count += 1;
        self.store.put_link(short_id, link.clone()).await?;

        Ok(link)
    }

    /// Full snapshot of the links collection for the aggregator's
    /// cross-tenant views. Not part of the owner-facing surface.
    pub(crate) async fn snapshot(&self) -> Result<LinkMap, AppError> {
        self.store.load_links().await
    }

    async fn allocate_short_id(&self) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = generate_short_id();

            if self.store.get_link(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(AppError::CapacityExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockStore;
    use crate::domain::entities::{BrowserFamily, DeviceClass};
    use mockall::Sequence;

    fn sample_link(short_id: &str, owner: &str) -> Link {
        Link::new(
            short_id.to_string(),
            "https://example.com/".to_string(),
            owner.to_string(),
            Utc::now(),
        )
    }

    fn sample_event() -> ClickEvent {
        ClickEvent::new(
            Utc::now(),
            DeviceClass::Desktop,
            BrowserFamily::Chrome,
            "Berlin, Germany".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_normalizes_and_persists() {
        let mut store = MockStore::new();
        store.expect_get_link().times(1).returning(|_| Ok(None));
        store
            .expect_put_link()
            .withf(|_, link| link.destination_url == "https://example.com/page")
            .times(1)
            .returning(|_, _| Ok(()));

        let registry = LinkRegistry::new(Arc::new(store));
        let link = registry.create("example.com/page", "user_1").await.unwrap();

        assert_eq!(link.destination_url, "https://example.com/page");
        assert_eq!(link.owner_id, "user_1");
        assert_eq!(link.click_count, 0);
        assert!(link.history.is_empty());
        assert_eq!(link.short_id.len(), 8);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_destination_without_touching_store() {
        let store = MockStore::new();

        let registry = LinkRegistry::new(Arc::new(store));
        let result = registry.create("not a url", "user_1").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::InvalidDestination { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_retries_on_collision() {
        let mut store = MockStore::new();
        let mut seq = Sequence::new();

        // First candidate collides, second is free.
        store
            .expect_get_link()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(Some(sample_link(id, "someone_else"))));
        store
            .expect_get_link()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        store
            .expect_put_link()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let registry = LinkRegistry::new(Arc::new(store));
        let result = registry.create("https://example.com", "user_1").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_exhausts_after_bounded_attempts() {
        let mut store = MockStore::new();
        store
            .expect_get_link()
            .times(MAX_ID_ATTEMPTS)
            .returning(|id| Ok(Some(sample_link(id, "someone_else"))));
        store.expect_put_link().times(0);

        let registry = LinkRegistry::new(Arc::new(store));
        let result = registry.create("https://example.com", "user_1").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::CapacityExhausted { .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_missing_is_not_found() {
        let mut store = MockStore::new();
        store.expect_get_link().times(1).returning(|_| Ok(None));

        let registry = LinkRegistry::new(Arc::new(store));
        let result = registry.resolve("missing1").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_forbidden_and_leaves_link() {
        let mut store = MockStore::new();
        store
            .expect_get_link()
            .times(1)
            .returning(|id| Ok(Some(sample_link(id, "user_1"))));
        store.expect_delete_link().times(0);

        let registry = LinkRegistry::new(Arc::new(store));
        let result = registry.delete("abc12345", "user_2").await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_delete_by_owner_removes() {
        let mut store = MockStore::new();
        store
            .expect_get_link()
            .times(1)
            .returning(|id| Ok(Some(sample_link(id, "user_1"))));
        store
            .expect_delete_link()
            .times(1)
            .returning(|_| Ok(true));

        let registry = LinkRegistry::new(Arc::new(store));
        assert!(registry.delete("abc12345", "user_1").await.is_ok());
    }

    #[tokio::test]
    async fn test_qr_bump_on_missing_id_is_silent() {
        let mut store = MockStore::new();
        store.expect_get_link().times(1).returning(|_| Ok(None));
        store.expect_put_link().times(0);

        let registry = LinkRegistry::new(Arc::new(store));
        assert!(registry.increment_qr_export("missing1").await.is_ok());
    }

    #[tokio::test]
    async fn test_qr_bump_increments_counter() {
        let mut store = MockStore::new();
        store
            .expect_get_link()
            .times(1)
            .returning(|id| Ok(Some(sample_link(id, "user_1"))));
        store
            .expect_put_link()
            .withf(|_, link| link.qr_export_count == 1)
            .times(1)
            .returning(|_, _| Ok(()));

        let registry = LinkRegistry::new(Arc::new(store));
        assert!(registry.increment_qr_export("abc12345").await.is_ok());
    }

    #[tokio::test]
    async fn test_append_click_keeps_counter_and_history_in_step() {
        let mut store = MockStore::new();
        store
            .expect_get_link()
            .times(1)
            .returning(|id| Ok(Some(sample_link(id, "user_1"))));
        store
            .expect_put_link()
            .withf(|_, link| link.click_count == 1 && link.history.len() == 1)
            .times(1)
            .returning(|_, _| Ok(()));

        let registry = LinkRegistry::new(Arc::new(store));
        let updated = registry
            .append_click("abc12345", sample_event())
            .await
            .unwrap();

        assert_eq!(updated.click_count, updated.history.len() as u64);
    }

    #[tokio::test]
    async fn test_append_click_on_missing_id_mutates_nothing() {
        let mut store = MockStore::new();
        store.expect_get_link().times(1).returning(|_| Ok(None));
        store.expect_put_link().times(0);

        let registry = LinkRegistry::new(Arc::new(store));
        let result = registry.append_click("missing1", sample_event()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_by_owner_filters() {
        let mut store = MockStore::new();
        store.expect_load_links().times(1).returning(|| {
            let mut map = LinkMap::new();
            map.insert("aaaa1111".to_string(), sample_link("aaaa1111", "user_1"));
            map.insert("bbbb2222".to_string(), sample_link("bbbb2222", "user_2"));
            map.insert("cccc3333".to_string(), sample_link("cccc3333", "user_1"));
            Ok(map)
        });

        let registry = LinkRegistry::new(Arc::new(store));
        let links = registry.list_by_owner("user_1").await.unwrap();

        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.owner_id == "user_1"));
    }
}

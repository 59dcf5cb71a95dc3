//! Read-side analytics aggregation.
//!
//! Folds stored click history into summaries on demand; never mutates
//! stored state.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::application::services::LinkRegistry;
use crate::domain::entities::{ClickEvent, Link};
use crate::domain::store::Store;
use crate::error::AppError;

/// `(category, count)` pairs ordered by first occurrence in the history.
///
/// Deliberately not sorted by magnitude; callers wanting a ranking sort
/// explicitly.
pub type CategoryCounts = Vec<(String, u64)>;

/// Per-link analytics summary.
#[derive(Debug, Clone, Serialize)]
pub struct LinkSummary {
    pub total_clicks: u64,
    pub devices: CategoryCounts,
    pub browsers: CategoryCounts,
    pub locations: CategoryCounts,
    pub history: Vec<ClickEvent>,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
}

/// Cross-link aggregate for the operator-facing view.
///
/// Folds over ALL links regardless of owner; never expose it to a regular
/// owner-scoped caller.
#[derive(Debug, Clone, Serialize)]
pub struct OverallStats {
    pub total_links: u64,
    pub total_clicks: u64,
    pub total_qr_exports: u64,
    pub most_clicked: Option<Link>,
    pub today_clicks: u64,
}

/// Service computing per-link and cross-link summaries.
pub struct StatsService<S: Store> {
    registry: Arc<LinkRegistry<S>>,
}

impl<S: Store> StatsService<S> {
    /// Creates a stats service over the given registry.
    pub fn new(registry: Arc<LinkRegistry<S>>) -> Self {
        Self { registry }
    }

    /// Folds a link's history into category counts and totals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is absent.
    pub async fn summarize(&self, short_id: &str) -> Result<LinkSummary, AppError> {
        let link = self.registry.resolve(short_id).await?;

        let mut devices = CategoryCounts::new();
        let mut browsers = CategoryCounts::new();
        let mut locations = CategoryCounts::new();

        for event in &link.history {
            bump(&mut devices, &event.device.to_string());
            bump(&mut browsers, &event.browser.to_string());
            bump(&mut locations, &event.location);
        }

        Ok(LinkSummary {
            total_clicks: link.click_count,
            devices,
            browsers,
            locations,
            history: link.history,
            destination_url: link.destination_url,
            created_at: link.created_at,
        })
    }

    /// Folds across all links into the operator aggregate.
    ///
    /// Ties for the most-clicked link keep the first link encountered in
    /// iteration order; the store guarantees no order, so which link wins a
    /// true tie is accepted non-determinism. "Today" is the current calendar
    /// day in the local time zone.
    pub async fn overall_stats(&self) -> Result<OverallStats, AppError> {
        let links = self.registry.snapshot().await?;
        let today = Local::now().date_naive();

        let total_links = links.len() as u64;
        let mut total_clicks = 0u64;
        let mut total_qr_exports = 0u64;
        let mut today_clicks = 0u64;
        let mut most_clicked: Option<Link> = None;

        for link in links.into_values() {
            total_clicks += link.click_count;
            total_qr_exports += link.qr_export_count;
            today_clicks += link
                .history
                .iter()
                .filter(|e| e.timestamp.with_timezone(&Local).date_naive() == today)
                .count() as u64;

            // Strictly greater: a link with zero clicks never becomes the
            // top performer, and ties keep the first link encountered.
            let best_so_far = most_clicked.as_ref().map_or(0, |best| best.click_count);
            if link.click_count > best_so_far {
                most_clicked = Some(link);
            }
        }

        Ok(OverallStats {
            total_links,
            total_clicks,
            total_qr_exports,
            most_clicked,
            today_clicks,
        })
    }
}

fn bump(counts: &mut CategoryCounts, category: &str) {
    if let Some(entry) = counts.iter_mut().find(|(name, _)| name == category) {
        entry.1 += 1;
    } else {
        counts.push((category.to_string(), 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BrowserFamily, DeviceClass};
    use crate::infrastructure::persistence::MemoryStore;

    fn event(device: DeviceClass, browser: BrowserFamily, location: &str) -> ClickEvent {
        ClickEvent::new(Utc::now(), device, browser, location.to_string())
    }

    async fn registry() -> Arc<LinkRegistry<MemoryStore>> {
        Arc::new(LinkRegistry::new(Arc::new(MemoryStore::new())))
    }

    #[tokio::test]
    async fn test_summarize_counts_by_first_occurrence_order() {
        let registry = registry().await;
        let link = registry
            .create("https://example.com", "user_1")
            .await
            .unwrap();

        let sequence = [
            event(DeviceClass::Mobile, BrowserFamily::Safari, "Tokyo, Japan"),
            event(DeviceClass::Desktop, BrowserFamily::Chrome, "London, UK"),
            event(DeviceClass::Mobile, BrowserFamily::Chrome, "Tokyo, Japan"),
        ];
        for e in sequence {
            registry.append_click(&link.short_id, e).await.unwrap();
        }

        let service = StatsService::new(Arc::clone(&registry));
        let summary = service.summarize(&link.short_id).await.unwrap();

        assert_eq!(summary.total_clicks, 3);
        assert_eq!(
            summary.devices,
            vec![("Mobile".to_string(), 2), ("Desktop".to_string(), 1)]
        );
        assert_eq!(
            summary.browsers,
            vec![("Safari".to_string(), 1), ("Chrome".to_string(), 2)]
        );
        assert_eq!(
            summary.locations,
            vec![("Tokyo, Japan".to_string(), 2), ("London, UK".to_string(), 1)]
        );
        assert_eq!(summary.history.len(), 3);
        assert_eq!(summary.destination_url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_summarize_missing_is_not_found() {
        let registry = registry().await;
        let service = StatsService::new(registry);

        let result = service.summarize("missing1").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_overall_stats_over_zero_links() {
        let registry = registry().await;
        let service = StatsService::new(registry);

        let stats = service.overall_stats().await.unwrap();
        assert_eq!(stats.total_links, 0);
        assert_eq!(stats.total_clicks, 0);
        assert_eq!(stats.total_qr_exports, 0);
        assert!(stats.most_clicked.is_none());
        assert_eq!(stats.today_clicks, 0);
    }

    #[tokio::test]
    async fn test_overall_stats_totals_and_top_performer() {
        let registry = registry().await;
        let quiet = registry
            .create("https://example.com/quiet", "user_1")
            .await
            .unwrap();
        let busy = registry
            .create("https://example.com/busy", "user_2")
            .await
            .unwrap();

        registry
            .append_click(
                &quiet.short_id,
                event(DeviceClass::Desktop, BrowserFamily::Chrome, "Singapore"),
            )
            .await
            .unwrap();
        for _ in 0..3 {
            registry
                .append_click(
                    &busy.short_id,
                    event(DeviceClass::Mobile, BrowserFamily::Safari, "Singapore"),
                )
                .await
                .unwrap();
        }
        registry.increment_qr_export(&quiet.short_id).await.unwrap();

        let service = StatsService::new(Arc::clone(&registry));
        let stats = service.overall_stats().await.unwrap();

        assert_eq!(stats.total_links, 2);
        assert_eq!(stats.total_clicks, 4);
        assert_eq!(stats.total_qr_exports, 1);
        assert_eq!(stats.most_clicked.unwrap().short_id, busy.short_id);
        // Every event above was recorded just now.
        assert_eq!(stats.today_clicks, 4);
    }

    #[tokio::test]
    async fn test_overall_stats_unclicked_links_have_no_top_performer() {
        let registry = registry().await;
        registry
            .create("https://example.com", "user_1")
            .await
            .unwrap();

        let service = StatsService::new(registry);
        let stats = service.overall_stats().await.unwrap();

        assert_eq!(stats.total_links, 1);
        assert!(stats.most_clicked.is_none());
    }
}

//! Click recording service.

use std::sync::Arc;

use chrono::Utc;

use crate::application::services::LinkRegistry;
use crate::domain::entities::ClickEvent;
use crate::domain::store::Store;
use crate::error::AppError;
use crate::utils::classifier::{classify_browser, classify_device, pick_location};

/// Records one click event per resolved visit.
///
/// Classifies the requesting environment, builds the event, and hands it to
/// the registry for an atomic append-and-count update.
pub struct ClickRecorder<S: Store> {
    registry: Arc<LinkRegistry<S>>,
}

impl<S: Store> Clone for ClickRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<S: Store> ClickRecorder<S> {
    /// Creates a recorder over the given registry.
    pub fn new(registry: Arc<LinkRegistry<S>>) -> Self {
        Self { registry }
    }

    /// Records a click against `short_id`.
    ///
    /// `descriptor` is the client-supplied capability string (user-agent
    /// style); device and browser categories are derived from it, the
    /// location label is a uniform-random placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is absent; no state is
    /// mutated in that case.
    pub async fn record(&self, short_id: &str, descriptor: &str) -> Result<ClickEvent, AppError> {
        let event = ClickEvent::new(
            Utc::now(),
            classify_device(descriptor),
            classify_browser(descriptor),
            pick_location(),
        );

        let link = self.registry.append_click(short_id, event.clone()).await?;
        tracing::debug!(
            short_id = %short_id,
            clicks = link.click_count,
            device = %event.device,
            browser = %event.browser,
            "click recorded"
        );

        Ok(event)
    }
}

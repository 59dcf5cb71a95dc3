//! Shared helpers for the integration test suite.
#![allow(dead_code)]

use std::sync::Arc;

use linkstash::application::services::{ClickRecorder, LinkRegistry, StatsService};
use linkstash::infrastructure::persistence::MemoryStore;

pub const CHROME_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

pub struct TestStack {
    pub registry: Arc<LinkRegistry<MemoryStore>>,
    pub recorder: ClickRecorder<MemoryStore>,
    pub stats: StatsService<MemoryStore>,
}

/// Builds the full service stack over a fresh in-memory store.
pub fn stack() -> TestStack {
    let registry = Arc::new(LinkRegistry::new(Arc::new(MemoryStore::new())));
    TestStack {
        recorder: ClickRecorder::new(Arc::clone(&registry)),
        stats: StatsService::new(Arc::clone(&registry)),
        registry,
    }
}

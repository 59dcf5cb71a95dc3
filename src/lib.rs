//! # linkstash
//!
//! A short-link registry with per-visit click analytics.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and the storage trait
//! - **Application Layer** ([`application`]) - Registry, click recorder, and
//!   analytics services
//! - **Infrastructure Layer** ([`infrastructure`]) - File-backed and in-memory
//!   store implementations
//! - **Utilities** ([`utils`]) - Short id generation, URL normalization, and
//!   capability classification
//!
//! ## Features
//!
//! - Collision-checked 8-character short ids from OS entropy
//! - Append-only click history with device/browser/location categorization
//! - Per-owner link isolation; resolution stays owner-agnostic
//! - On-demand aggregation: per-link summaries and a cross-link operator view
//! - Durable JSON-blob persistence compatible with the version-0 data layout
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use linkstash::application::services::{ClickRecorder, LinkRegistry, StatsService};
//! use linkstash::infrastructure::persistence::JsonFileStore;
//!
//! # async fn run() -> Result<(), linkstash::AppError> {
//! let store = Arc::new(JsonFileStore::open("./data")?);
//! let registry = Arc::new(LinkRegistry::new(store));
//! let recorder = ClickRecorder::new(Arc::clone(&registry));
//! let stats = StatsService::new(Arc::clone(&registry));
//!
//! let link = registry.create("example.com/page", "user_1").await?;
//! recorder.record(&link.short_id, "Mozilla/5.0 ...").await?;
//! let summary = stats.summarize(&link.short_id).await?;
//! assert_eq!(summary.total_clicks, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! Authentication is an external collaborator: callers supply an opaque
//! `owner_id` string and nothing else. Presentation (charts, redirect
//! serving) consumes the plain data this crate returns. QR rendering happens
//! outside; only the export counter lives here. Location labels are an
//! explicit placeholder, not geodata.
//!
//! ## Configuration
//!
//! The CLI loads its settings from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ClickRecorder, LinkRegistry, LinkSummary, OverallStats, StatsService,
    };
    pub use crate::domain::entities::{BrowserFamily, ClickEvent, DeviceClass, Link, User};
    pub use crate::domain::store::Store;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{JsonFileStore, MemoryStore};
}

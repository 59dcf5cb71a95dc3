//! Business logic services.
//!
//! - [`LinkRegistry`] - CRUD over short links with ownership enforcement
//! - [`ClickRecorder`] - classified click-event appends
//! - [`StatsService`] - read-side per-link and cross-link aggregation

pub mod click_recorder;
pub mod link_registry;
pub mod stats_service;

pub use click_recorder::ClickRecorder;
pub use link_registry::LinkRegistry;
pub use stats_service::{CategoryCounts, LinkSummary, OverallStats, StatsService};

//! Click event entity and its coarse classification categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse device category derived from a client capability descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    Desktop,
    Mobile,
    Tablet,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceClass::Desktop => "Desktop",
            DeviceClass::Mobile => "Mobile",
            DeviceClass::Tablet => "Tablet",
        };
        f.write_str(s)
    }
}

/// Coarse browser family derived from a client capability descriptor.
///
/// `Other` covers every descriptor that matches none of the known markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserFamily {
    Chrome,
    Firefox,
    Safari,
    Edge,
    Opera,
    Other,
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BrowserFamily::Chrome => "Chrome",
            BrowserFamily::Firefox => "Firefox",
            BrowserFamily::Safari => "Safari",
            BrowserFamily::Edge => "Edge",
            BrowserFamily::Opera => "Opera",
            BrowserFamily::Other => "Other",
        };
        f.write_str(s)
    }
}

/// One recorded resolution of a link.
///
/// Events are append-only: once written to a link's history no field is ever
/// mutated. The `location` label is a placeholder category, not real geodata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub device: DeviceClass,
    pub browser: BrowserFamily,
    pub location: String,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(
        timestamp: DateTime<Utc>,
        device: DeviceClass,
        browser: BrowserFamily,
        location: String,
    ) -> Self {
        Self {
            timestamp,
            device,
            browser,
            location,
        }
    }
}

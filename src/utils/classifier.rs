//! Coarse client capability classification.
//!
//! Pure string-matching over a client-supplied capability descriptor (a
//! user-agent style string). Precedence matters in both classifiers: tablet
//! markers are checked before the broader mobile alternation, and several
//! browser identifiers are substrings of one another.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::domain::entities::{BrowserFamily, DeviceClass};

static TABLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tablet|ipad|playbook|silk").expect("valid tablet pattern"));

static ANDROID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)android").expect("valid android pattern"));

static ANDROID_MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)mobi").expect("valid mobile marker pattern"));

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Mobile|Android|iP(hone|od)|IEMobile|BlackBerry|Kindle|Silk-Accelerated|(hpw|web)OS|Opera M(obi|ini)",
    )
    .expect("valid mobile pattern")
});

/// Placeholder location catalogue.
///
/// An explicit stand-in for real geolocation; no request signal carries
/// geodata, so a uniform-random label is picked per click instead.
const LOCATIONS: [&str; 10] = [
    "New York, USA",
    "London, UK",
    "Tokyo, Japan",
    "Paris, France",
    "Berlin, Germany",
    "Sydney, Australia",
    "Toronto, Canada",
    "Mumbai, India",
    "Singapore",
    "Dubai, UAE",
];

/// Classifies the device category of a capability descriptor.
///
/// Tablet markers win over the generic mobile alternation: an Android tablet
/// descriptor carries `Android` without a `Mobi` marker and must not fall
/// through to [`DeviceClass::Mobile`]. Everything unmatched is Desktop.
pub fn classify_device(descriptor: &str) -> DeviceClass {
    if TABLET_RE.is_match(descriptor)
        || (ANDROID_RE.is_match(descriptor) && !ANDROID_MOBILE_RE.is_match(descriptor))
    {
        return DeviceClass::Tablet;
    }
    if MOBILE_RE.is_match(descriptor) {
        return DeviceClass::Mobile;
    }
    DeviceClass::Desktop
}

/// Classifies the browser family of a capability descriptor.
///
/// Substring precedence: Firefox, then Chrome excluding the Edge marker,
/// then Safari excluding Chrome, then Edge, then Opera. Chrome descriptors
/// also contain `Safari`, and Edge descriptors contain both, so the order
/// is load-bearing.
pub fn classify_browser(descriptor: &str) -> BrowserFamily {
    if descriptor.contains("Firefox") {
        BrowserFamily::Firefox
    } else if descriptor.contains("Chrome") && !descriptor.contains("Edg") {
        BrowserFamily::Chrome
    } else if descriptor.contains("Safari") && !descriptor.contains("Chrome") {
        BrowserFamily::Safari
    } else if descriptor.contains("Edg") {
        BrowserFamily::Edge
    } else if descriptor.contains("Opera") || descriptor.contains("OPR") {
        BrowserFamily::Opera
    } else {
        BrowserFamily::Other
    }
}

/// Picks a uniformly random label from the placeholder location catalogue.
///
/// Never to be treated as accurate: see [`LOCATIONS`].
pub fn pick_location() -> String {
    let idx = rand::rng().random_range(0..LOCATIONS.len());
    LOCATIONS[idx].to_string()
}

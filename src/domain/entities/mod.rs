//! Core business data structures.

pub mod click;
pub mod link;
pub mod user;

pub use click::{BrowserFamily, ClickEvent, DeviceClass};
pub use link::Link;
pub use user::User;

//! Infrastructure layer: persistence backends.

pub mod persistence;

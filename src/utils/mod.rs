//! Pure helper functions with no storage dependencies.

pub mod classifier;
pub mod code_generator;
pub mod url_normalizer;

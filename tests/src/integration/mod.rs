//! Cross-crate integration tests.

pub mod concurrency;
pub mod logging;
pub mod properties;

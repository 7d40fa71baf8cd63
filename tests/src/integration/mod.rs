//! Cross-crate integration tests.

pub mod concurrency;
pub mod filters;
pub mod flows;

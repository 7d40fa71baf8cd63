//! # Service Container
//!
//! Holds the identity directory and the material ledger behind `Arc`s so
//! dashboards can share them.

pub mod config;
pub mod services;

pub use config::RuntimeConfig;
pub use services::EcoContainer;

//! # EcoTrace Container
//!
//! ```text
//! Identity (1) ──UserId──→ Ledger (2)
//! ```
//!
//! The identity directory has no dependencies; the ledger consumes the ids it
//! mints. Both are wrapped in `Arc` and lock internally.

use std::sync::Arc;

use eco_01_identity::IdentityService;
use eco_02_ledger::{ConfigError, LedgerService, SystemTimeSource, TimeSource};
use tracing::info;

use crate::container::config::RuntimeConfig;

/// Holds every service instance.
pub struct EcoContainer<T: TimeSource = SystemTimeSource> {
    /// Runtime configuration the services were built from.
    pub config: RuntimeConfig,
    /// Identity directory (Subsystem 1).
    pub identity: Arc<IdentityService>,
    /// Material ledger (Subsystem 2).
    pub ledger: Arc<LedgerService<T>>,
}

impl EcoContainer<SystemTimeSource> {
    /// Builds all services on the system clock.
    pub fn new(config: RuntimeConfig) -> Result<Self, ConfigError> {
        Self::with_time_source(config, SystemTimeSource)
    }
}

impl<T: TimeSource> EcoContainer<T> {
    /// Builds all services on a caller-supplied clock.
    pub fn with_time_source(config: RuntimeConfig, time_source: T) -> Result<Self, ConfigError> {
        config.validate()?;

        info!("[eco-01] Initializing identity directory...");
        let identity = Arc::new(IdentityService::new());

        info!("[eco-02] Initializing material ledger...");
        let ledger = Arc::new(LedgerService::new(config.ledger.clone(), time_source)?);

        Ok(Self {
            config,
            identity,
            ledger,
        })
    }
}

//! # Runtime Configuration
//!
//! Ledger configuration plus runtime-only switches. Logging is configured
//! separately through [`eco_telemetry::TelemetryConfig`], before this is
//! loaded, so warnings raised while parsing are visible.

use eco_02_ledger::{ConfigError, LedgerConfig};
use tracing::warn;

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Ledger configuration.
    pub ledger: LedgerConfig,
    /// Populate the demo users and materials at startup.
    pub seed_demo_data: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            seed_demo_data: true,
        }
    }
}

impl RuntimeConfig {
    /// Load from environment variables.
    ///
    /// See [`LedgerConfig::from_env`]; additionally `ECO_SEED_DEMO`
    /// (default: true).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            ledger: LedgerConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(raw) = lookup("ECO_SEED_DEMO") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.seed_demo_data = true,
                "0" | "false" | "no" | "off" => config.seed_demo_data = false,
                _ => warn!(value = %raw, "Ignoring unparseable ECO_SEED_DEMO"),
            }
        }

        config
    }

    /// Validate before building services.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ledger.validate()
    }
}

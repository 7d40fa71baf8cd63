//! Ledger configuration.
//!
//! Defaults reproduce the reference behavior; every field can be overridden
//! from the environment.

use crate::domain::credit::CREDIT_CONVERSION_FACTOR;
use crate::domain::value_objects::QrId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// How strictly lifecycle operations check the current status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Each operation is legal only from its predecessor state, and a credit
    /// can be decided once.
    #[default]
    Strict,
    /// Transport and verify force their target status from any state, and
    /// decisions overwrite earlier ones.
    Lenient,
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Credit factor must be finite and positive, got {0}")]
    InvalidCreditFactor(f64),

    #[error("QR length must be between {min} and {max}, got {got}")]
    InvalidQrLength { got: usize, min: usize, max: usize },

    #[error("QR prefix must not start or end with whitespace, got {0:?}")]
    InvalidQrPrefix(String),

    #[error("Unknown transition policy: {0:?} (expected strict or lenient)")]
    UnknownPolicy(String),
}

/// Ledger configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    /// Credit units per verified kg.
    pub credit_factor: f64,
    /// Transition guard mode.
    pub transition_policy: TransitionPolicy,
    /// Text placed before the id slice in QR tokens.
    pub qr_prefix: String,
    /// Number of id hex chars in a QR token before clash extension.
    pub qr_length: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            credit_factor: CREDIT_CONVERSION_FACTOR,
            transition_policy: TransitionPolicy::Strict,
            qr_prefix: "ECO-".to_string(),
            qr_length: 8,
        }
    }
}

impl LedgerConfig {
    /// Shortest accepted QR id slice.
    pub const MIN_QR_LENGTH: usize = 4;

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ECO_CREDIT_FACTOR`: Credit units per kg (default: 0.8)
    /// - `ECO_TRANSITION_POLICY`: `strict` or `lenient` (default: strict)
    /// - `ECO_QR_PREFIX`: QR token prefix (default: ECO-)
    /// - `ECO_QR_LENGTH`: Id chars in a QR token (default: 8)
    ///
    /// Unparseable or out-of-range values are ignored with a warning and the
    /// default is kept, so the result always passes [`validate`](Self::validate).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("ECO_CREDIT_FACTOR") {
            match raw.trim().parse::<f64>() {
                Ok(factor) => match Self::check_credit_factor(factor) {
                    Ok(()) => config.credit_factor = factor,
                    Err(e) => warn!(error = %e, "Ignoring ECO_CREDIT_FACTOR"),
                },
                Err(_) => warn!(value = %raw, "Ignoring unparseable ECO_CREDIT_FACTOR"),
            }
        }

        if let Some(raw) = lookup("ECO_TRANSITION_POLICY") {
            match raw.parse() {
                Ok(policy) => config.transition_policy = policy,
                Err(e) => warn!(error = %e, "Ignoring ECO_TRANSITION_POLICY"),
            }
        }

        if let Some(prefix) = lookup("ECO_QR_PREFIX") {
            match Self::check_qr_prefix(&prefix) {
                Ok(()) => config.qr_prefix = prefix,
                Err(e) => warn!(error = %e, "Ignoring ECO_QR_PREFIX"),
            }
        }

        if let Some(raw) = lookup("ECO_QR_LENGTH") {
            match raw.trim().parse::<usize>() {
                Ok(length) => match Self::check_qr_length(length) {
                    Ok(()) => config.qr_length = length,
                    Err(e) => warn!(error = %e, "Ignoring ECO_QR_LENGTH"),
                },
                Err(_) => warn!(value = %raw, "Ignoring unparseable ECO_QR_LENGTH"),
            }
        }

        config
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_credit_factor(self.credit_factor)?;
        Self::check_qr_prefix(&self.qr_prefix)?;
        Self::check_qr_length(self.qr_length)
    }

    fn check_credit_factor(factor: f64) -> Result<(), ConfigError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::InvalidCreditFactor(factor));
        }
        Ok(())
    }

    // Scanned tokens are trimmed before lookup, so padding here would make
    // every issued token unresolvable.
    fn check_qr_prefix(prefix: &str) -> Result<(), ConfigError> {
        if prefix != prefix.trim() {
            return Err(ConfigError::InvalidQrPrefix(prefix.to_string()));
        }
        Ok(())
    }

    fn check_qr_length(length: usize) -> Result<(), ConfigError> {
        if !(Self::MIN_QR_LENGTH..=QrId::MAX_ID_CHARS).contains(&length) {
            return Err(ConfigError::InvalidQrLength {
                got: length,
                min: Self::MIN_QR_LENGTH,
                max: QrId::MAX_ID_CHARS,
            });
        }
        Ok(())
    }

    /// Shorthand for a default config with the given policy.
    pub fn with_policy(policy: TransitionPolicy) -> Self {
        Self {
            transition_policy: policy,
            ..Self::default()
        }
    }
}

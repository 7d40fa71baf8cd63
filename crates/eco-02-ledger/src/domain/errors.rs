//! Ledger error types.
//!
//! Two failure kinds exist: malformed input (`Validation`) and references to
//! records that do not exist (`MaterialNotFound` / `CreditNotFound`). Neither
//! leaves a partial mutation behind.

use super::value_objects::MaterialStatus;
use shared_types::{CreditId, MaterialId};
use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LedgerError {
    /// Operation input was rejected.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced material does not exist.
    #[error("Material not found: {0}")]
    MaterialNotFound(MaterialId),

    /// Referenced carbon credit does not exist.
    #[error("Carbon credit not found: {0}")]
    CreditNotFound(CreditId),
}

impl LedgerError {
    /// True for malformed input or an illegal transition.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True when a referenced record is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MaterialNotFound(_) | Self::CreditNotFound(_))
    }
}

/// Reasons an operation's input is rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Offending field name.
        field: &'static str,
    },

    /// A quantity was zero, negative, NaN or infinite.
    #[error("{field} must be a positive number, got {value}")]
    NonPositive {
        /// Offending field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The material is not in the predecessor state of the operation.
    #[error("Illegal transition: {from} -> {to}")]
    IllegalTransition {
        /// Current status.
        from: MaterialStatus,
        /// Attempted status.
        to: MaterialStatus,
    },

    /// The credit already carries an admin decision.
    #[error("Carbon credit {credit_id} has already been decided")]
    AlreadyDecided {
        /// The decided credit.
        credit_id: CreditId,
    },
}

/// A status token did not name a lifecycle state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown material status: {0:?}")]
pub struct ParseStatusError(pub String);

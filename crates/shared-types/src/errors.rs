//! # Error Types
//!
//! Parse errors for the shared primitives.

use thiserror::Error;

/// A role token did not name one of the four supply-chain parties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role: {0:?} (expected farmer, transporter, plant or admin)")]
pub struct ParseRoleError(pub String);

/// An identifier string was not a valid UUID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid identifier {input:?}: {reason}")]
pub struct ParseIdError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

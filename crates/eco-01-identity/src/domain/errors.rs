//! Identity errors.

use shared_types::ParseRoleError;
use thiserror::Error;

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Errors raised by the identity directory.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Identifier was empty after trimming.
    #[error("Identifier must not be empty")]
    EmptyIdentifier,

    /// Role token is not one of farmer, transporter, plant, admin.
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),
}

impl From<ParseRoleError> for IdentityError {
    fn from(err: ParseRoleError) -> Self {
        IdentityError::UnknownRole(err.0)
    }
}

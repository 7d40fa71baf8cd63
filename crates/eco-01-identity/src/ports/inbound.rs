//! Inbound port - IdentityApi
//!
//! Called by the session layer when a user logs in with a self-declared role.
//! The returned id is what the ledger records as farmer, transporter, plant
//! or admin.

use crate::domain::{IdentityResult, User};
use shared_types::{Role, UserId};

/// Primary API for the identity directory.
pub trait IdentityApi: Send + Sync {
    /// Stable user for `(identifier, role)`; creates it on first call.
    ///
    /// # Errors
    /// - `EmptyIdentifier`: identifier is blank
    fn get_or_create_user(&self, identifier: &str, role: Role) -> IdentityResult<User>;

    /// Same as `get_or_create_user` with the role given as a token.
    ///
    /// # Errors
    /// - `UnknownRole`: token is not farmer, transporter, plant or admin
    /// - `EmptyIdentifier`: identifier is blank
    fn login(&self, identifier: &str, role: &str) -> IdentityResult<User> {
        let role: Role = role.parse()?;
        self.get_or_create_user(identifier, role)
    }

    fn get_user(&self, id: &UserId) -> Option<User>;

    /// Looks up without creating.
    fn find_user(&self, identifier: &str, role: Role) -> Option<User>;

    /// Users in creation order, optionally restricted to one role.
    fn list_users(&self, role: Option<Role>) -> Vec<User>;
}

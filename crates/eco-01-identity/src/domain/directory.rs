//! # User Directory
//!
//! Mints and deduplicates caller ids.
//!
//! ## Invariants
//!
//! - One `UserId` per `(identifier, role)` pair; repeat lookups return it
//! - Identifiers are compared after trimming, case-sensitively
//! - Listing order is creation order

use super::entities::User;
use super::errors::{IdentityError, IdentityResult};
use shared_types::{Role, UserId};
use std::collections::HashMap;

/// In-memory identity store.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    by_id: HashMap<UserId, usize>,
    by_key: HashMap<(String, Role), usize>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns the user for `(identifier, role)`, creating it on first sight.
    ///
    /// The boolean is `true` when a new record was created.
    pub fn get_or_create(
        &mut self,
        identifier: &str,
        role: Role,
    ) -> IdentityResult<(User, bool)> {
        let identifier = normalize(identifier)?;
        let key = (identifier.to_string(), role);

        if let Some(&pos) = self.by_key.get(&key) {
            return Ok((self.users[pos].clone(), false));
        }

        let user = User {
            id: UserId::new(),
            identifier: key.0.clone(),
            role,
        };
        let pos = self.users.len();
        self.by_id.insert(user.id, pos);
        self.by_key.insert(key, pos);
        self.users.push(user.clone());
        Ok((user, true))
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.by_id.get(id).map(|&pos| &self.users[pos])
    }

    /// Looks up without creating.
    pub fn find(&self, identifier: &str, role: Role) -> Option<&User> {
        let identifier = normalize(identifier).ok()?;
        self.by_key
            .get(&(identifier.to_string(), role))
            .map(|&pos| &self.users[pos])
    }

    /// Users in creation order, optionally restricted to one role.
    pub fn list(&self, role: Option<Role>) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .collect()
    }
}

fn normalize(identifier: &str) -> IdentityResult<&str> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        Err(IdentityError::EmptyIdentifier)
    } else {
        Ok(trimmed)
    }
}

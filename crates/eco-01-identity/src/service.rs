//! Identity Service - Thread-safe wrapper around the user directory.

use crate::domain::{IdentityResult, User, UserDirectory};
use crate::ports::inbound::IdentityApi;
use parking_lot::RwLock;
use shared_types::{Role, UserId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Identity directory service. Clones share the same directory.
#[derive(Clone, Default)]
pub struct IdentityService {
    directory: Arc<RwLock<UserDirectory>>,
}

impl IdentityService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known users.
    pub fn user_count(&self) -> usize {
        self.directory.read().len()
    }
}

impl IdentityApi for IdentityService {
    fn get_or_create_user(&self, identifier: &str, role: Role) -> IdentityResult<User> {
        let mut directory = self.directory.write();
        match directory.get_or_create(identifier, role) {
            Ok((user, true)) => {
                info!(
                    user_id = %user.id,
                    identifier = %user.identifier,
                    %role,
                    "[eco-01] User created"
                );
                Ok(user)
            }
            Ok((user, false)) => {
                debug!(user_id = %user.id, %role, "[eco-01] Existing user resolved");
                Ok(user)
            }
            Err(e) => {
                warn!(%role, error = %e, "[eco-01] User lookup rejected");
                Err(e)
            }
        }
    }

    fn get_user(&self, id: &UserId) -> Option<User> {
        let user = self.directory.read().get(id).cloned();
        debug!(user_id = %id, found = user.is_some(), "[eco-01] User lookup by id");
        user
    }

    fn find_user(&self, identifier: &str, role: Role) -> Option<User> {
        let user = self.directory.read().find(identifier, role).cloned();
        debug!(identifier, %role, found = user.is_some(), "[eco-01] User lookup");
        user
    }

    fn list_users(&self, role: Option<Role>) -> Vec<User> {
        self.directory
            .read()
            .list(role)
            .into_iter()
            .cloned()
            .collect()
    }
}

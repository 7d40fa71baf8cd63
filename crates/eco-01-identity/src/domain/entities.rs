//! Identity entities.

use serde::{Deserialize, Serialize};
use shared_types::{Role, UserId};

/// A caller identity.
///
/// The same person logging in under two roles gets two records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Login identifier (username or email), stored trimmed.
    pub identifier: String,
    pub role: Role,
}

//! Supply-chain roles.

use crate::errors::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four parties of the chain, in hand-off order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Registers residue.
    Farmer,
    /// Moves residue to a plant.
    Transporter,
    /// Weighs and verifies residue on arrival.
    Plant,
    /// Approves or rejects the derived credit.
    Admin,
}

impl Role {
    /// All roles in hand-off order.
    pub const ALL: [Role; 4] = [Role::Farmer, Role::Transporter, Role::Plant, Role::Admin];

    /// Wire token for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Transporter => "transporter",
            Role::Plant => "plant",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "farmer" => Ok(Role::Farmer),
            "transporter" => Ok(Role::Transporter),
            "plant" => Ok(Role::Plant),
            "admin" => Ok(Role::Admin),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

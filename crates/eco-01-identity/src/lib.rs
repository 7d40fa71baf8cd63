//! # eco-01-identity
//!
//! Identity directory for the four supply-chain roles.
//!
//! ## Overview
//!
//! Turns a login identifier plus a self-declared role into a stable
//! `UserId`. Lookups are idempotent: the same `(identifier, role)` always
//! resolves to the same id, and the same identifier under another role is a
//! different user.
//!
//! Roles are claims, not credentials. Nothing here authenticates the caller.
//!
//! ```text
//! Session ──(identifier, role)──→ Identity (1) ──UserId──→ Ledger (2)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use eco_01_identity::{IdentityApi, IdentityService};
//!
//! let identity = IdentityService::new();
//! let farmer = identity.login("farmer1", "farmer")?;
//! assert_eq!(identity.login("farmer1", "farmer")?.id, farmer.id);
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{IdentityError, IdentityResult, User, UserDirectory};
pub use ports::inbound::IdentityApi;
pub use service::IdentityService;

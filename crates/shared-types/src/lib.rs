//! # Shared Types Crate
//!
//! Primitives shared by every EcoTrace crate.
//!
//! ## Design Principles
//!
//! - **Opaque Identity**: Callers are identified by a `UserId` minted by the
//!   identity directory. The ledger never re-derives roles from it.
//! - **Typed Identifiers**: Materials, credits and users each get their own
//!   UUID newtype so they cannot be confused at call sites.
//! - **Millisecond Time**: All timestamps are `u64` milliseconds since the
//!   UNIX epoch.

pub mod errors;
pub mod ids;
pub mod role;

pub use errors::*;
pub use ids::{CreditId, MaterialId, UserId};
pub use role::Role;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

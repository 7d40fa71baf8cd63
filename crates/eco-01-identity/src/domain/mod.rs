//! # Domain Layer - Identity Directory
//!
//! - `entities`: User
//! - `directory`: UserDirectory (get-or-create keyed on identifier + role)
//! - `errors`: IdentityError

pub mod directory;
pub mod entities;
pub mod errors;

pub use directory::*;
pub use entities::*;
pub use errors::*;

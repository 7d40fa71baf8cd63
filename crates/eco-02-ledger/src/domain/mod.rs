//! # Domain Layer - Material Ledger
//!
//! Pure business logic: no clocks, no locks, no logging.
//!
//! ## Components
//!
//! - `entities`: Material, CarbonCredit
//! - `value_objects`: MaterialStatus, QrId, filters, stats, operation outcomes
//! - `repository`: MaterialRepository (canonical store + filtered reads)
//! - `lifecycle`: LifecycleEngine (register, transport, verify, decide)
//! - `credit`: credit derivation from verified weight
//! - `invariants`: input and status/field consistency rules
//! - `formatting`: display helpers for stored tokens
//! - `errors`: LedgerError, ValidationError

pub mod credit;
pub mod entities;
pub mod errors;
pub mod formatting;
pub mod invariants;
pub mod lifecycle;
pub mod repository;
pub mod value_objects;

pub use credit::*;
pub use entities::*;
pub use errors::*;
pub use formatting::*;
pub use invariants::*;
pub use lifecycle::*;
pub use repository::*;
pub use value_objects::*;

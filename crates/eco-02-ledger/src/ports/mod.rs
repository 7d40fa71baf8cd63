//! Ports (Hexagonal Architecture)
//!
//! - `inbound`: LedgerApi - what dashboards call
//! - `outbound`: TimeSource - what the ledger needs from the host

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

//! Ports (Hexagonal Architecture)

pub mod inbound;

pub use inbound::*;

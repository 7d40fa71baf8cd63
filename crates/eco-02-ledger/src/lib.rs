//! # eco-02-ledger
//!
//! Material ledger tracking agricultural residue from farm to approved
//! carbon credit.
//!
//! ## Overview
//!
//! This crate provides:
//! - **Lifecycle Engine**: four role-gated transitions over one record per batch
//! - **Credit Derivation**: `credit_value = verified_weight * 0.8` at verification
//! - **Repository**: insertion-ordered store with id and QR lookups
//! - **Read Views**: filtered lists, credit/material joins, aggregate stats
//!
//! ## Lifecycle
//!
//! ```text
//! [registered] ──transport──→ [in-transit] ──verify──→ [verified] ──approve──→ [approved]
//!                                                          │
//!                                                          └──────reject──────→ [rejected]
//! ```
//!
//! | Operation | Role | Sets |
//! |-----------|------|------|
//! | `register_material` | Farmer | farmer_id, qr_id, status=registered |
//! | `update_transport` | Transporter | transporter_id, location, status=in-transit |
//! | `verify_material` | Plant | plant_id, verified_weight, status=verified, new credit |
//! | `decide_credit` | Admin | credit.approved, credit.admin_id, material status |
//!
//! ## Invariants
//!
//! | Rule | Where |
//! |------|-------|
//! | Weights are finite and positive | `invariant_positive` |
//! | Type and location are non-blank | `invariant_non_empty` |
//! | Status moves along the graph above (strict policy) | `invariant_transition` |
//! | `transporter_id` set iff status is in-transit or later | `invariant_status_fields` |
//! | Credit value equals verified weight times factor | `credit_value_with_factor` |
//! | QR tokens are unique | `QrId::derive` |
//!
//! Failed operations leave the store untouched.
//!
//! ## Example
//!
//! ```rust,ignore
//! use eco_02_ledger::{LedgerService, LedgerConfig, MockTimeSource};
//! use eco_02_ledger::ports::inbound::LedgerApi;
//!
//! let ledger = LedgerService::new(LedgerConfig::default(), MockTimeSource::new(0))?;
//! let material = ledger.register_material("corn_stover", 1000.0, "41.87,-87.62", farmer)?;
//! ledger.update_transport(&material.id, hauler, "40.71,-74.00")?;
//! let outcome = ledger.verify_material(&material.id, plant, 730.0)?;
//! ledger.decide_credit(&outcome.credit.id, true, admin)?;
//! ```

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::{ConfigError, LedgerConfig, TransitionPolicy};
pub use domain::{
    credit_value, credit_value_with_factor, format_material_type, CarbonCredit, CreditFilter,
    CreditView, DecisionOutcome, LedgerError, LedgerResult, LedgerStats, LifecycleEngine,
    Material, MaterialFilter, MaterialRepository, MaterialStatus, ParseStatusError, QrId,
    ValidationError, VerificationOutcome, CREDIT_CONVERSION_FACTOR, KNOWN_MATERIAL_TYPES,
};
pub use ports::inbound::LedgerApi;
pub use ports::outbound::{MockTimeSource, SystemTimeSource, TimeSource};
pub use service::LedgerService;

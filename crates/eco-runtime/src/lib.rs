//! # EcoTrace Runtime Library
//!
//! Exposes the runtime's wiring for tests. The entry point is the `main.rs`
//! binary.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Install the log subscriber
//! 3. Build the identity directory and the ledger
//! 4. Seed demo data (unless `ECO_SEED_DEMO=false`)
//! 5. Print a dashboard snapshot

pub mod container;
pub mod seed;

pub use container::{EcoContainer, RuntimeConfig};
pub use seed::{seed_demo_data, SeedError, SeedReport};

use eco_02_ledger::{
    CreditFilter, CreditView, LedgerApi, LedgerStats, Material, MaterialFilter, TimeSource,
};
use serde::Serialize;

/// Everything the admin dashboard renders on load.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub stats: LedgerStats,
    pub materials: Vec<Material>,
    pub pending_credits: Vec<CreditView>,
    pub approved_credits: Vec<CreditView>,
}

impl DashboardSnapshot {
    /// Reads the current ledger state.
    pub fn capture<T: TimeSource>(container: &EcoContainer<T>) -> Self {
        let ledger = &container.ledger;
        Self {
            stats: ledger.stats(),
            materials: ledger.list_materials(&MaterialFilter::all()),
            pending_credits: ledger.list_credit_views(&CreditFilter::pending()),
            approved_credits: ledger.list_credit_views(&CreditFilter::all().approved(true)),
        }
    }
}

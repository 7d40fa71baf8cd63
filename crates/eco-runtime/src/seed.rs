//! # Demo Seed
//!
//! Populates an empty ledger with the demo data set shown on first launch:
//!
//! | Who | What |
//! |-----|------|
//! | farmer1 | corn_stover 1000 kg, picked up by transporter1 |
//! | farmer2 | wheat_straw 750 kg, verified at 730 kg by plant1, approved by admin1 |
//! | farmer1 | sugarcane_bagasse 1200 kg, still registered |
//!
//! The strict policy does not allow verifying a batch that never left the
//! farm, so under it the wheat straw gets a transporter1 hop first. The
//! lenient policy replays the data set without that hop.

use eco_01_identity::{IdentityApi, IdentityError, User};
use eco_02_ledger::{CarbonCredit, LedgerApi, LedgerError, Material, TransitionPolicy};
use serde::Serialize;
use shared_types::Role;
use thiserror::Error;
use tracing::info;

/// Seeding failures.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Identity error while seeding: {0}")]
    Identity(#[from] IdentityError),

    #[error("Ledger error while seeding: {0}")]
    Ledger(#[from] LedgerError),
}

/// Records created by [`seed_demo_data`].
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub users: Vec<User>,
    pub materials: Vec<Material>,
    pub credits: Vec<CarbonCredit>,
}

/// Seeds the demo users, materials and the one approved credit.
///
/// Users are get-or-create, so re-seeding reuses them; materials are always
/// new.
pub fn seed_demo_data(
    identity: &impl IdentityApi,
    ledger: &impl LedgerApi,
    policy: TransitionPolicy,
) -> Result<SeedReport, SeedError> {
    let farmer1 = identity.get_or_create_user("farmer1", Role::Farmer)?;
    let farmer2 = identity.get_or_create_user("farmer2", Role::Farmer)?;
    let transporter1 = identity.get_or_create_user("transporter1", Role::Transporter)?;
    let plant1 = identity.get_or_create_user("plant1", Role::Plant)?;
    let admin1 = identity.get_or_create_user("admin1", Role::Admin)?;

    let corn = ledger.register_material(
        "corn_stover",
        1000.0,
        "41.8781° N, 87.6298° W",
        farmer1.id,
    )?;
    let wheat = ledger.register_material(
        "wheat_straw",
        750.0,
        "34.0522° N, 118.2437° W",
        farmer2.id,
    )?;
    let bagasse = ledger.register_material(
        "sugarcane_bagasse",
        1200.0,
        "25.7617° N, 80.1918° W",
        farmer1.id,
    )?;

    ledger.update_transport(&corn.id, transporter1.id, "40.7128° N, 74.0060° W")?;

    if policy == TransitionPolicy::Strict {
        ledger.update_transport(&wheat.id, transporter1.id, &wheat.location)?;
    }
    let verification = ledger.verify_material(&wheat.id, plant1.id, 730.0)?;
    let decision = ledger.decide_credit(&verification.credit.id, true, admin1.id)?;

    let materials = [corn.id, wheat.id, bagasse.id]
        .iter()
        .filter_map(|id| ledger.get_material(id))
        .collect::<Vec<_>>();

    info!(
        users = 5,
        materials = materials.len(),
        credit_value = decision.credit.credit_value,
        "Demo data seeded"
    );

    Ok(SeedReport {
        users: vec![farmer1, farmer2, transporter1, plant1, admin1],
        materials,
        credits: vec![decision.credit],
    })
}

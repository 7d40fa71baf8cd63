//! # Inbound Port - LedgerApi
//!
//! Primary driving port used by the four role dashboards.
//!
//! | Method | Acting role |
//! |--------|-------------|
//! | `register_material` | Farmer |
//! | `update_transport` | Transporter |
//! | `verify_material` | Plant |
//! | `decide_credit` | Admin |
//!
//! Roles are not checked here; callers pass ids they have already resolved
//! through the identity directory.

use crate::domain::{
    CarbonCredit, CreditFilter, CreditView, DecisionOutcome, LedgerResult, LedgerStats, Material,
    MaterialFilter, VerificationOutcome,
};
use shared_types::{CreditId, MaterialId, UserId};

/// Primary API for the material ledger.
///
/// Every write is atomic: it either commits one transition and returns the
/// new record versions, or fails with no effect. Reads return copies.
///
/// # Example
///
/// ```rust,ignore
/// use eco_02_ledger::ports::LedgerApi;
///
/// fn example(ledger: &impl LedgerApi, farmer: UserId, hauler: UserId, plant: UserId, admin: UserId) {
///     let material = ledger.register_material("corn_stover", 1000.0, "41.87,-87.62", farmer)?;
///     ledger.update_transport(&material.id, hauler, "40.71,-74.00")?;
///     let outcome = ledger.verify_material(&material.id, plant, 730.0)?;
///     ledger.decide_credit(&outcome.credit.id, true, admin)?;
/// }
/// ```
pub trait LedgerApi: Send + Sync {
    /// Registers a new material in `registered`.
    ///
    /// # Errors
    /// - `Validation`: blank type/location or non-positive weight
    fn register_material(
        &self,
        material_type: &str,
        weight: f64,
        location: &str,
        farmer_id: UserId,
    ) -> LedgerResult<Material>;

    /// Records pickup by a transporter; status becomes `in-transit`.
    ///
    /// # Errors
    /// - `MaterialNotFound`: unknown id
    /// - `Validation`: blank location, or illegal transition under the strict policy
    fn update_transport(
        &self,
        material_id: &MaterialId,
        transporter_id: UserId,
        location: &str,
    ) -> LedgerResult<Material>;

    /// Records plant weighing; status becomes `verified` and a credit is minted.
    ///
    /// # Errors
    /// - `MaterialNotFound`: unknown id
    /// - `Validation`: non-positive weight, or illegal transition under the strict policy
    fn verify_material(
        &self,
        material_id: &MaterialId,
        plant_id: UserId,
        verified_weight: f64,
    ) -> LedgerResult<VerificationOutcome>;

    /// Records the admin decision on a credit and propagates it to the material.
    ///
    /// # Errors
    /// - `CreditNotFound`: unknown id
    /// - `Validation`: already decided or illegal transition under the strict policy
    fn decide_credit(
        &self,
        credit_id: &CreditId,
        approved: bool,
        admin_id: UserId,
    ) -> LedgerResult<DecisionOutcome>;

    /// Materials matching every predicate of `filter`, in insertion order.
    fn list_materials(&self, filter: &MaterialFilter) -> Vec<Material>;

    /// Gets a material by id.
    fn get_material(&self, id: &MaterialId) -> Option<Material>;

    /// Resolves a scanned QR token.
    fn get_material_by_qr(&self, qr_id: &str) -> Option<Material>;

    /// Credits matching every predicate of `filter`, in insertion order.
    fn list_credits(&self, filter: &CreditFilter) -> Vec<CarbonCredit>;

    /// Gets a credit by id.
    fn get_credit(&self, id: &CreditId) -> Option<CarbonCredit>;

    /// First credit derived from a material.
    fn credit_for_material(&self, material_id: &MaterialId) -> Option<CarbonCredit>;

    /// Credits joined with their materials.
    fn list_credit_views(&self, filter: &CreditFilter) -> Vec<CreditView>;

    /// Aggregate counters.
    fn stats(&self) -> LedgerStats;
}

//! Ledger Service - Thread-safe facade over the lifecycle engine.
//!
//! All writes take the engine's write lock, so transitions on the same record
//! are serialized and each read observes a committed state.

use crate::config::{ConfigError, LedgerConfig};
use crate::domain::{
    credit_value_with_factor, CarbonCredit, CreditFilter, CreditView, DecisionOutcome,
    LedgerResult, LedgerStats, LifecycleEngine, Material, MaterialFilter, VerificationOutcome,
};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::{SystemTimeSource, TimeSource};
use parking_lot::RwLock;
use shared_types::{CreditId, MaterialId, UserId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Material ledger service.
///
/// Cheap to clone; clones share the same store.
pub struct LedgerService<T: TimeSource> {
    engine: Arc<RwLock<LifecycleEngine>>,
    time_source: Arc<T>,
}

impl<T: TimeSource> Clone for LedgerService<T> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            time_source: Arc::clone(&self.time_source),
        }
    }
}

impl<T: TimeSource> LedgerService<T> {
    /// Creates a service over an empty store.
    pub fn new(config: LedgerConfig, time_source: T) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            policy = %config.transition_policy,
            credit_factor = config.credit_factor,
            qr_prefix = %config.qr_prefix,
            qr_length = config.qr_length,
            "[eco-02] Ledger initialized"
        );
        Ok(Self {
            engine: Arc::new(RwLock::new(LifecycleEngine::new(config))),
            time_source: Arc::new(time_source),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> LedgerConfig {
        self.engine.read().config().clone()
    }

    /// Credit a verification at `verified_weight` would mint, without recording anything.
    pub fn preview_credit(&self, verified_weight: f64) -> f64 {
        credit_value_with_factor(verified_weight, self.engine.read().config().credit_factor)
    }
}

impl LedgerService<SystemTimeSource> {
    /// Service with default configuration and the system clock.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(LedgerConfig::default(), SystemTimeSource)
    }
}

impl<T: TimeSource> LedgerApi for LedgerService<T> {
    fn register_material(
        &self,
        material_type: &str,
        weight: f64,
        location: &str,
        farmer_id: UserId,
    ) -> LedgerResult<Material> {
        let mut engine = self.engine.write();
        let now = self.time_source.now();
        match engine.register(material_type, weight, location, farmer_id, now) {
            Ok(material) => {
                info!(
                    material_id = %material.id,
                    qr_id = %material.qr_id,
                    material_type = %material.material_type,
                    weight = material.weight,
                    farmer_id = %farmer_id,
                    "[eco-02] Material registered"
                );
                Ok(material)
            }
            Err(e) => {
                warn!(farmer_id = %farmer_id, error = %e, "[eco-02] Registration rejected");
                Err(e)
            }
        }
    }

    fn update_transport(
        &self,
        material_id: &MaterialId,
        transporter_id: UserId,
        location: &str,
    ) -> LedgerResult<Material> {
        let mut engine = self.engine.write();
        let now = self.time_source.now();
        match engine.transport(material_id, transporter_id, location, now) {
            Ok(material) => {
                info!(
                    material_id = %material_id,
                    transporter_id = %transporter_id,
                    location = %material.location,
                    "[eco-02] Material in transit"
                );
                Ok(material)
            }
            Err(e) => {
                warn!(material_id = %material_id, error = %e, "[eco-02] Transport rejected");
                Err(e)
            }
        }
    }

    fn verify_material(
        &self,
        material_id: &MaterialId,
        plant_id: UserId,
        verified_weight: f64,
    ) -> LedgerResult<VerificationOutcome> {
        let mut engine = self.engine.write();
        let now = self.time_source.now();
        let previous_credit = engine
            .repository()
            .credit_for_material(material_id)
            .map(|c| c.id);

        match engine.verify(material_id, plant_id, verified_weight, now) {
            Ok(outcome) => {
                if let Some(previous) = previous_credit {
                    warn!(
                        material_id = %material_id,
                        previous_credit = %previous,
                        "[eco-02] Material re-verified; minting an additional credit"
                    );
                }
                info!(
                    material_id = %material_id,
                    plant_id = %plant_id,
                    verified_weight,
                    credit_id = %outcome.credit.id,
                    credit_value = outcome.credit.credit_value,
                    "[eco-02] Material verified"
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!(material_id = %material_id, error = %e, "[eco-02] Verification rejected");
                Err(e)
            }
        }
    }

    fn decide_credit(
        &self,
        credit_id: &CreditId,
        approved: bool,
        admin_id: UserId,
    ) -> LedgerResult<DecisionOutcome> {
        let mut engine = self.engine.write();
        let now = self.time_source.now();
        let was_decided = engine
            .repository()
            .get_credit(credit_id)
            .is_some_and(|c| !c.is_pending());

        match engine.decide(credit_id, approved, admin_id, now) {
            Ok(outcome) => {
                if was_decided {
                    warn!(credit_id = %credit_id, "[eco-02] Overwriting an earlier decision");
                }
                match &outcome.material {
                    Some(material) => info!(
                        credit_id = %credit_id,
                        material_id = %material.id,
                        approved,
                        admin_id = %admin_id,
                        status = %material.status,
                        "[eco-02] Credit decided"
                    ),
                    None => warn!(
                        credit_id = %credit_id,
                        material_id = %outcome.credit.material_id,
                        approved,
                        "[eco-02] Credit decided but its material is missing"
                    ),
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!(credit_id = %credit_id, error = %e, "[eco-02] Decision rejected");
                Err(e)
            }
        }
    }

    fn list_materials(&self, filter: &MaterialFilter) -> Vec<Material> {
        let engine = self.engine.read();
        let materials: Vec<Material> = engine
            .repository()
            .list_materials(filter)
            .into_iter()
            .cloned()
            .collect();
        debug!(count = materials.len(), ?filter, "[eco-02] Listed materials");
        materials
    }

    fn get_material(&self, id: &MaterialId) -> Option<Material> {
        self.engine.read().repository().get_material(id).cloned()
    }

    fn get_material_by_qr(&self, qr_id: &str) -> Option<Material> {
        let found = self.engine.read().repository().get_material_by_qr(qr_id).cloned();
        debug!(qr_id, found = found.is_some(), "[eco-02] QR lookup");
        found
    }

    fn list_credits(&self, filter: &CreditFilter) -> Vec<CarbonCredit> {
        let engine = self.engine.read();
        let credits: Vec<CarbonCredit> = engine
            .repository()
            .list_credits(filter)
            .into_iter()
            .cloned()
            .collect();
        debug!(count = credits.len(), ?filter, "[eco-02] Listed credits");
        credits
    }

    fn get_credit(&self, id: &CreditId) -> Option<CarbonCredit> {
        self.engine.read().repository().get_credit(id).cloned()
    }

    fn credit_for_material(&self, material_id: &MaterialId) -> Option<CarbonCredit> {
        self.engine
            .read()
            .repository()
            .credit_for_material(material_id)
            .cloned()
    }

    fn list_credit_views(&self, filter: &CreditFilter) -> Vec<CreditView> {
        let engine = self.engine.read();
        let repository = engine.repository();
        repository
            .list_credits(filter)
            .into_iter()
            .map(|credit| CreditView {
                credit: credit.clone(),
                material: repository.get_material(&credit.material_id).cloned(),
            })
            .collect()
    }

    fn stats(&self) -> LedgerStats {
        self.engine.read().repository().stats()
    }
}

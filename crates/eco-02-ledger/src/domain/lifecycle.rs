//! # Lifecycle Engine
//!
//! Validates and applies the four state-changing operations.
//!
//! ```text
//! register ──→ [Registered] ──transport──→ [InTransit] ──verify──→ [Verified] ──decide──→ [Approved|Rejected]
//!                                                                      │
//!                                                                      └─ mints CarbonCredit
//! ```
//!
//! Every operation checks all inputs and preconditions before touching the
//! repository, then writes complete new record versions. A failed operation
//! leaves the repository exactly as it was.

use super::credit::credit_value_with_factor;
use super::entities::{CarbonCredit, Material, MaterialParams};
use super::errors::{LedgerError, LedgerResult, ValidationError};
use super::invariants::{invariant_non_empty, invariant_positive, invariant_transition};
use super::repository::MaterialRepository;
use super::value_objects::{DecisionOutcome, MaterialStatus, QrId, VerificationOutcome};
use crate::config::{LedgerConfig, TransitionPolicy};
use shared_types::{CreditId, MaterialId, Timestamp, UserId};

/// Owns the repository and applies lifecycle operations to it.
#[derive(Debug)]
pub struct LifecycleEngine {
    config: LedgerConfig,
    repository: MaterialRepository,
}

impl LifecycleEngine {
    /// Creates an engine over an empty repository.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            repository: MaterialRepository::new(),
        }
    }

    /// Creates an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(LedgerConfig::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Read access to the records.
    pub fn repository(&self) -> &MaterialRepository {
        &self.repository
    }

    /// Farmer registers a new material.
    ///
    /// # Errors
    /// - `EmptyField` for a blank `material_type` or `location`
    /// - `NonPositive` for a weight that is not a finite number above zero
    pub fn register(
        &mut self,
        material_type: &str,
        weight: f64,
        location: &str,
        farmer_id: UserId,
        now: Timestamp,
    ) -> LedgerResult<Material> {
        invariant_non_empty("material_type", material_type)?;
        invariant_positive("weight", weight)?;
        invariant_non_empty("location", location)?;

        let id = MaterialId::new();
        let qr_id = QrId::derive(
            &id,
            &self.config.qr_prefix,
            self.config.qr_length,
            |candidate| self.repository.is_qr_taken(candidate),
        );

        let material = Material::new(MaterialParams {
            id,
            qr_id,
            material_type: material_type.to_string(),
            weight,
            location: location.to_string(),
            farmer_id,
            created_at: now,
        });

        self.repository.insert_material(material.clone());
        Ok(material)
    }

    /// Transporter picks up a material and reports its location.
    ///
    /// # Errors
    /// - `EmptyField` for a blank `location`
    /// - `MaterialNotFound` for an unknown id
    /// - `IllegalTransition` (strict) unless the material is `Registered`
    pub fn transport(
        &mut self,
        material_id: &MaterialId,
        transporter_id: UserId,
        location: &str,
        now: Timestamp,
    ) -> LedgerResult<Material> {
        invariant_non_empty("location", location)?;

        let current = self.material(material_id)?;
        self.guard(current.status, MaterialStatus::InTransit)?;

        let mut updated = current.clone();
        updated.transporter_id = Some(transporter_id);
        updated.location = location.to_string();
        updated.status = MaterialStatus::InTransit;
        updated.updated_at = now;

        self.repository.replace_material(updated.clone());
        Ok(updated)
    }

    /// Plant weighs a material and mints its carbon credit.
    ///
    /// # Errors
    /// - `NonPositive` for a verified weight that is not a finite number above zero
    /// - `MaterialNotFound` for an unknown id
    /// - `IllegalTransition` (strict) unless the material is `InTransit`
    pub fn verify(
        &mut self,
        material_id: &MaterialId,
        plant_id: UserId,
        verified_weight: f64,
        now: Timestamp,
    ) -> LedgerResult<VerificationOutcome> {
        invariant_positive("verified_weight", verified_weight)?;

        let current = self.material(material_id)?;
        self.guard(current.status, MaterialStatus::Verified)?;

        let mut updated = current.clone();
        updated.plant_id = Some(plant_id);
        updated.verified_weight = Some(verified_weight);
        updated.status = MaterialStatus::Verified;
        updated.updated_at = now;

        let credit = CarbonCredit::new(
            *material_id,
            credit_value_with_factor(verified_weight, self.config.credit_factor),
            now,
        );

        self.repository.replace_material(updated.clone());
        self.repository.insert_credit(credit.clone());

        Ok(VerificationOutcome {
            material: updated,
            credit,
        })
    }

    /// Admin approves or rejects a credit; the material follows.
    ///
    /// # Errors
    /// - `CreditNotFound` for an unknown credit id
    /// - `AlreadyDecided` (strict) if the credit already carries a decision
    /// - `MaterialNotFound` (strict) if the credit's material is missing
    /// - `IllegalTransition` (strict) unless the material is `Verified`
    pub fn decide(
        &mut self,
        credit_id: &CreditId,
        approved: bool,
        admin_id: UserId,
        now: Timestamp,
    ) -> LedgerResult<DecisionOutcome> {
        let credit = self
            .repository
            .get_credit(credit_id)
            .ok_or(LedgerError::CreditNotFound(*credit_id))?;

        let target = if approved {
            MaterialStatus::Approved
        } else {
            MaterialStatus::Rejected
        };

        let material = self.repository.get_material(&credit.material_id);

        if self.config.transition_policy == TransitionPolicy::Strict {
            if !credit.is_pending() {
                return Err(ValidationError::AlreadyDecided {
                    credit_id: *credit_id,
                }
                .into());
            }
            let material =
                material.ok_or(LedgerError::MaterialNotFound(credit.material_id))?;
            invariant_transition(material.status, target)?;
        }

        let mut updated_credit = credit.clone();
        updated_credit.approved = approved;
        updated_credit.admin_id = Some(admin_id);
        updated_credit.updated_at = now;

        let updated_material = material.map(|m| {
            let mut m = m.clone();
            m.status = target;
            m.updated_at = now;
            m
        });

        self.repository.replace_credit(updated_credit.clone());
        if let Some(m) = &updated_material {
            self.repository.replace_material(m.clone());
        }

        Ok(DecisionOutcome {
            credit: updated_credit,
            material: updated_material,
        })
    }

    fn material(&self, id: &MaterialId) -> LedgerResult<&Material> {
        self.repository
            .get_material(id)
            .ok_or(LedgerError::MaterialNotFound(*id))
    }

    /// Strict mode only: `from -> to` must be an edge of the lifecycle graph.
    fn guard(&self, from: MaterialStatus, to: MaterialStatus) -> Result<(), ValidationError> {
        match self.config.transition_policy {
            TransitionPolicy::Strict => invariant_transition(from, to),
            TransitionPolicy::Lenient => Ok(()),
        }
    }
}

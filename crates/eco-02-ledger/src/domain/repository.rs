//! # Material Repository
//!
//! Canonical store for materials and credits.
//!
//! ## Data Structures
//!
//! - `materials` / `credits`: records in insertion order
//! - `material_index` / `credit_index`: O(1) position lookup by id
//! - `qr_index`: O(1) lookup by QR token
//!
//! ## Invariants Enforced
//!
//! - Replacing a record keeps its insertion slot, so listing order is stable
//! - QR tokens are unique (`qr_index` is consulted at derivation time)
//!
//! Writes are `pub(crate)`: only the lifecycle engine mutates records.

use super::entities::{CarbonCredit, Material};
use super::value_objects::{CreditFilter, LedgerStats, MaterialFilter, MaterialStatus, QrId};
use shared_types::{CreditId, MaterialId};
use std::collections::HashMap;

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MaterialRepository {
    /// Materials in insertion order.
    materials: Vec<Material>,
    /// Material id -> position in `materials`.
    material_index: HashMap<MaterialId, usize>,
    /// QR token -> material id.
    qr_index: HashMap<QrId, MaterialId>,
    /// Credits in insertion order.
    credits: Vec<CarbonCredit>,
    /// Credit id -> position in `credits`.
    credit_index: HashMap<CreditId, usize>,
}

impl MaterialRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of materials.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Number of credits.
    pub fn credit_count(&self) -> usize {
        self.credits.len()
    }

    /// Gets a material by id.
    pub fn get_material(&self, id: &MaterialId) -> Option<&Material> {
        self.material_index.get(id).map(|&pos| &self.materials[pos])
    }

    /// Gets a material by QR token.
    pub fn get_material_by_qr(&self, qr_id: &str) -> Option<&Material> {
        self.qr_index
            .get(&QrId::from_token(qr_id))
            .and_then(|id| self.get_material(id))
    }

    /// Checks whether a QR token is already assigned.
    pub fn is_qr_taken(&self, qr_id: &QrId) -> bool {
        self.qr_index.contains_key(qr_id)
    }

    /// Materials matching `filter`, in insertion order.
    pub fn list_materials(&self, filter: &MaterialFilter) -> Vec<&Material> {
        self.materials.iter().filter(|m| filter.matches(m)).collect()
    }

    /// Gets a credit by id.
    pub fn get_credit(&self, id: &CreditId) -> Option<&CarbonCredit> {
        self.credit_index.get(id).map(|&pos| &self.credits[pos])
    }

    /// Credits matching `filter`, in insertion order.
    pub fn list_credits(&self, filter: &CreditFilter) -> Vec<&CarbonCredit> {
        self.credits.iter().filter(|c| filter.matches(c)).collect()
    }

    /// First credit (by insertion) derived from `material_id`.
    pub fn credit_for_material(&self, material_id: &MaterialId) -> Option<&CarbonCredit> {
        self.credits.iter().find(|c| c.material_id == *material_id)
    }

    /// Aggregate counters.
    pub fn stats(&self) -> LedgerStats {
        let mut stats = LedgerStats {
            total_materials: self.materials.len(),
            ..LedgerStats::default()
        };

        for material in &self.materials {
            match material.status {
                MaterialStatus::Registered => stats.materials_registered += 1,
                MaterialStatus::InTransit => stats.materials_in_transit += 1,
                MaterialStatus::Verified => stats.materials_verified += 1,
                MaterialStatus::Approved => stats.materials_approved += 1,
                MaterialStatus::Rejected => stats.materials_rejected += 1,
            }
        }

        for credit in &self.credits {
            stats.total_carbon_credits += credit.credit_value;
            if credit.approved {
                stats.approved_carbon_credits += credit.credit_value;
            }
        }

        stats
    }

    /// Appends a new material. The caller guarantees id and QR are fresh.
    pub(crate) fn insert_material(&mut self, material: Material) {
        debug_assert!(!self.material_index.contains_key(&material.id));
        self.material_index
            .insert(material.id, self.materials.len());
        self.qr_index.insert(material.qr_id.clone(), material.id);
        self.materials.push(material);
    }

    /// Swaps in a new version of an existing material, keeping its slot.
    ///
    /// Returns `false` (and stores nothing) if the id is unknown.
    pub(crate) fn replace_material(&mut self, material: Material) -> bool {
        match self.material_index.get(&material.id) {
            Some(&pos) => {
                self.materials[pos] = material;
                true
            }
            None => false,
        }
    }

    /// Appends a new credit.
    pub(crate) fn insert_credit(&mut self, credit: CarbonCredit) {
        debug_assert!(!self.credit_index.contains_key(&credit.id));
        self.credit_index.insert(credit.id, self.credits.len());
        self.credits.push(credit);
    }

    /// Swaps in a new version of an existing credit, keeping its slot.
    pub(crate) fn replace_credit(&mut self, credit: CarbonCredit) -> bool {
        match self.credit_index.get(&credit.id) {
            Some(&pos) => {
                self.credits[pos] = credit;
                true
            }
            None => false,
        }
    }
}

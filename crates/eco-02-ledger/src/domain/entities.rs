//! # Domain Entities
//!
//! Material and CarbonCredit records. Instances are owned by the
//! `MaterialRepository`; callers only ever see clones.

use super::formatting::format_material_type;
use super::value_objects::{MaterialStatus, QrId};
use serde::{Deserialize, Serialize};
use shared_types::{CreditId, MaterialId, Timestamp, UserId};

/// Residue types offered by the registration form.
///
/// The engine accepts any non-empty token; this list is the catalogue shown
/// to farmers.
pub const KNOWN_MATERIAL_TYPES: [&str; 5] = [
    "corn_stover",
    "wheat_straw",
    "sugarcane_bagasse",
    "rice_husks",
    "wood_chips",
];

/// A tracked unit of agricultural residue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Assigned at registration.
    pub id: MaterialId,
    /// Residue type token, e.g. `corn_stover`.
    pub material_type: String,
    /// Declared weight in kg.
    pub weight: f64,
    /// Weight measured at the plant, set once by verification.
    pub verified_weight: Option<f64>,
    /// Current lifecycle state.
    pub status: MaterialStatus,
    /// Last reported location; changed only by transport.
    pub location: String,
    /// QR payload derived from `id`.
    pub qr_id: QrId,
    /// Owning farmer.
    pub farmer_id: UserId,
    /// Set by transport.
    pub transporter_id: Option<UserId>,
    /// Set by verification.
    pub plant_id: Option<UserId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Parameters for creating a Material.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialParams {
    pub id: MaterialId,
    pub qr_id: QrId,
    pub material_type: String,
    pub weight: f64,
    pub location: String,
    pub farmer_id: UserId,
    pub created_at: Timestamp,
}

impl Material {
    /// Create a new material in `Registered`.
    pub fn new(params: MaterialParams) -> Self {
        Self {
            id: params.id,
            material_type: params.material_type,
            weight: params.weight,
            verified_weight: None,
            status: MaterialStatus::Registered,
            location: params.location,
            qr_id: params.qr_id,
            farmer_id: params.farmer_id,
            transporter_id: None,
            plant_id: None,
            created_at: params.created_at,
            updated_at: params.created_at,
        }
    }

    /// Display label for the residue type, e.g. `Corn Stover`.
    pub fn type_label(&self) -> String {
        format_material_type(&self.material_type)
    }

    /// Difference between measured and declared weight, once verified.
    pub fn weight_delta(&self) -> Option<f64> {
        self.verified_weight.map(|verified| verified - self.weight)
    }
}

/// Credit derived from a verified material, pending admin decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonCredit {
    pub id: CreditId,
    /// Material this credit was derived from (lookup only).
    pub material_id: MaterialId,
    /// `verified_weight * factor`, fixed at creation.
    pub credit_value: f64,
    pub approved: bool,
    /// Admin who decided; `None` while pending.
    pub admin_id: Option<UserId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CarbonCredit {
    /// Create a new undecided credit.
    pub fn new(material_id: MaterialId, credit_value: f64, created_at: Timestamp) -> Self {
        Self {
            id: CreditId::new(),
            material_id,
            credit_value,
            approved: false,
            admin_id: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// True until an admin has recorded a decision.
    pub fn is_pending(&self) -> bool {
        self.admin_id.is_none()
    }
}

//! Value objects for the material ledger.
//!
//! Status machine, QR tokens, query filters and aggregate views.

use super::entities::{CarbonCredit, Material};
use super::errors::ParseStatusError;
use serde::{Deserialize, Serialize};
use shared_types::{MaterialId, UserId};
use std::fmt;
use std::str::FromStr;

/// Material lifecycle state.
///
/// ```text
/// [Registered] ──transport──→ [InTransit] ──verify──→ [Verified] ──decide──→ [Approved]
///                                                          │
///                                                          └──── decide ──→ [Rejected]
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialStatus {
    /// Registered by a farmer, awaiting pickup.
    #[default]
    Registered,
    /// Picked up by a transporter.
    InTransit,
    /// Weighed at a plant; a credit exists.
    Verified,
    /// Credit approved by an admin.
    Approved,
    /// Credit rejected by an admin.
    Rejected,
}

impl MaterialStatus {
    /// Every status in lifecycle order.
    pub const ALL: [MaterialStatus; 5] = [
        Self::Registered,
        Self::InTransit,
        Self::Verified,
        Self::Approved,
        Self::Rejected,
    ];

    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: MaterialStatus) -> bool {
        matches!(
            (self, next),
            (Self::Registered, Self::InTransit)
                | (Self::InTransit, Self::Verified)
                | (Self::Verified, Self::Approved)
                | (Self::Verified, Self::Rejected)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// A transporter has been assigned in this state.
    pub fn has_transporter(&self) -> bool {
        !matches!(self, Self::Registered)
    }

    /// The material has been weighed at a plant in this state.
    pub fn is_verified_or_later(&self) -> bool {
        matches!(self, Self::Verified | Self::Approved | Self::Rejected)
    }

    /// Wire token (`in-transit`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::InTransit => "in-transit",
            Self::Verified => "verified",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Registered => "Registered",
            Self::InTransit => "In Transit",
            Self::Verified => "Verified",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Short shareable token encoded into a material's QR code.
///
/// Format: `<prefix><leading hex chars of the material id>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QrId(String);

impl QrId {
    /// Full length of a simple-form UUID.
    pub const MAX_ID_CHARS: usize = 32;

    /// Derives the QR token for `id`.
    ///
    /// Starts from the first `length` hex chars of the id and extends one char
    /// at a time while `is_taken` reports a clash. The full 32-char form is
    /// unique whenever material ids are.
    pub fn derive(
        id: &MaterialId,
        prefix: &str,
        length: usize,
        is_taken: impl Fn(&QrId) -> bool,
    ) -> Self {
        let simple = id.simple();
        let start = length.clamp(1, Self::MAX_ID_CHARS);
        for len in start..Self::MAX_ID_CHARS {
            let candidate = Self(format!("{}{}", prefix, &simple[..len]));
            if !is_taken(&candidate) {
                return candidate;
            }
        }
        Self(format!("{}{}", prefix, simple))
    }

    /// Wraps scanned token text for lookup.
    pub fn from_token(token: &str) -> Self {
        Self(token.trim().to_string())
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// AND-combined material predicates. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialFilter {
    pub farmer_id: Option<UserId>,
    pub transporter_id: Option<UserId>,
    pub plant_id: Option<UserId>,
    pub status: Option<MaterialStatus>,
}

impl MaterialFilter {
    /// Matches every material.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn farmer(mut self, farmer_id: UserId) -> Self {
        self.farmer_id = Some(farmer_id);
        self
    }

    pub fn transporter(mut self, transporter_id: UserId) -> Self {
        self.transporter_id = Some(transporter_id);
        self
    }

    pub fn plant(mut self, plant_id: UserId) -> Self {
        self.plant_id = Some(plant_id);
        self
    }

    pub fn status(mut self, status: MaterialStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check whether `material` satisfies every set predicate.
    pub fn matches(&self, material: &Material) -> bool {
        self.farmer_id.map_or(true, |id| material.farmer_id == id)
            && self
                .transporter_id
                .map_or(true, |id| material.transporter_id == Some(id))
            && self.plant_id.map_or(true, |id| material.plant_id == Some(id))
            && self.status.map_or(true, |status| material.status == status)
    }
}

/// AND-combined credit predicates. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreditFilter {
    pub material_id: Option<MaterialId>,
    pub approved: Option<bool>,
    pub admin_id: Option<UserId>,
    /// `Some(true)` keeps only undecided credits, `Some(false)` only decided ones.
    pub pending: Option<bool>,
}

impl CreditFilter {
    /// Matches every credit.
    pub fn all() -> Self {
        Self::default()
    }

    /// The admin review queue: credits nobody has decided yet.
    pub fn pending() -> Self {
        Self {
            pending: Some(true),
            ..Self::default()
        }
    }

    pub fn material(mut self, material_id: MaterialId) -> Self {
        self.material_id = Some(material_id);
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }

    pub fn admin(mut self, admin_id: UserId) -> Self {
        self.admin_id = Some(admin_id);
        self
    }

    /// Check whether `credit` satisfies every set predicate.
    pub fn matches(&self, credit: &CarbonCredit) -> bool {
        self.material_id.map_or(true, |id| credit.material_id == id)
            && self.approved.map_or(true, |approved| credit.approved == approved)
            && self.admin_id.map_or(true, |id| credit.admin_id == Some(id))
            && self.pending.map_or(true, |pending| credit.is_pending() == pending)
    }
}

/// Aggregate counters over the whole ledger.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_materials: usize,
    pub materials_registered: usize,
    pub materials_in_transit: usize,
    pub materials_verified: usize,
    pub materials_approved: usize,
    pub materials_rejected: usize,
    /// Sum of `credit_value` over every credit.
    pub total_carbon_credits: f64,
    /// Sum of `credit_value` over approved credits only.
    pub approved_carbon_credits: f64,
}

impl LedgerStats {
    /// Number of materials currently in `status`.
    pub fn count_for(&self, status: MaterialStatus) -> usize {
        match status {
            MaterialStatus::Registered => self.materials_registered,
            MaterialStatus::InTransit => self.materials_in_transit,
            MaterialStatus::Verified => self.materials_verified,
            MaterialStatus::Approved => self.materials_approved,
            MaterialStatus::Rejected => self.materials_rejected,
        }
    }

    /// Credit value not (yet) approved.
    pub fn pending_carbon_credits(&self) -> f64 {
        self.total_carbon_credits - self.approved_carbon_credits
    }

    /// Approved share of all credit value, `None` when no credit exists.
    pub fn approval_ratio(&self) -> Option<f64> {
        if self.total_carbon_credits > 0.0 {
            Some(self.approved_carbon_credits / self.total_carbon_credits)
        } else {
            None
        }
    }
}

/// A credit joined with the material it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditView {
    pub credit: CarbonCredit,
    pub material: Option<Material>,
}

/// Records emitted by a successful verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub material: Material,
    pub credit: CarbonCredit,
}

/// Records emitted by an admin decision.
///
/// `material` is `None` only under the lenient policy when the credit's
/// material has disappeared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub credit: CarbonCredit,
    pub material: Option<Material>,
}

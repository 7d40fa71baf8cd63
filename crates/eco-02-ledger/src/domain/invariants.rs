//! # Domain Invariants
//!
//! Input well-formedness rules and the status/field consistency rule for
//! materials.

use super::entities::Material;
use super::errors::ValidationError;
use super::value_objects::MaterialStatus;

/// Invariant: required text is not blank.
pub fn invariant_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Invariant: a quantity is finite and strictly positive.
pub fn invariant_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}

/// Invariant: a move follows the lifecycle graph.
pub fn invariant_transition(
    from: MaterialStatus,
    to: MaterialStatus,
) -> Result<(), ValidationError> {
    if !from.can_transition_to(to) {
        return Err(ValidationError::IllegalTransition { from, to });
    }
    Ok(())
}

/// Invariant: optional fields are present exactly in the states that set them.
///
/// - `verified_weight` and `plant_id` iff verified, approved or rejected
/// - `transporter_id` iff any state past registered
pub fn invariant_status_fields(material: &Material) -> bool {
    let weighed = material.status.is_verified_or_later();
    material.verified_weight.is_some() == weighed
        && material.plant_id.is_some() == weighed
        && material.transporter_id.is_some() == material.status.has_transporter()
}

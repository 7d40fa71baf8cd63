//! # Credit Deriver
//!
//! Converts a verified residue weight (kg) into carbon-credit units.

/// Credit units per verified kilogram.
pub const CREDIT_CONVERSION_FACTOR: f64 = 0.8;

/// Credit value for `verified_weight` at the standard factor.
pub fn credit_value(verified_weight: f64) -> f64 {
    credit_value_with_factor(verified_weight, CREDIT_CONVERSION_FACTOR)
}

/// Credit value for `verified_weight` at an explicit factor.
pub fn credit_value_with_factor(verified_weight: f64, factor: f64) -> f64 {
    verified_weight * factor
}

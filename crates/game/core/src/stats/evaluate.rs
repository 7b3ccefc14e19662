//! Pure scoring of one stat vector against another.
//!
//! - [`compute_damage`]: dot product used for damage, range, and gear scoring
//! - [`requirements_satisfied`]: elementwise minimums for equipping items
//! - [`can_afford`]: elementwise cost check for using a skill this tick

use strum::IntoEnumIterator;

use super::{AttributeKind, Attributes};

/// Dot product of a weight vector with character attributes.
///
/// Fields whose weight is absent or zero are skipped; a missing attribute on
/// the character counts as zero.
pub fn compute_damage(vector: &Attributes, attrs: &Attributes) -> f64 {
    AttributeKind::iter()
        .filter_map(|kind| {
            let weight = vector.get(kind).filter(|weight| *weight != 0.0)?;
            Some(weight * attrs.value(kind))
        })
        .sum()
}

/// Checks item requirements against the character's attributes.
///
/// An absent requirement always passes. A present requirement fails when the
/// character has a lower value, or lacks the field while the requirement is
/// positive.
pub fn requirements_satisfied(required: &Attributes, actual: &Attributes) -> bool {
    AttributeKind::iter().all(|kind| match (required.get(kind), actual.get(kind)) {
        (None, _) => true,
        (Some(needed), None) => needed <= 0.0,
        (Some(needed), Some(have)) => needed <= have,
    })
}

/// Checks whether the character can pay a skill's cost right now.
pub fn can_afford(cost: &Attributes, attrs: &Attributes) -> bool {
    cost.present()
        .filter(|(_, amount)| *amount != 0.0)
        .all(|(kind, amount)| attrs.value(kind) >= amount)
}

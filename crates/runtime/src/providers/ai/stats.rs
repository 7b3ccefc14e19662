//! Stat point allocation policy.

use game_core::{AttributeKind, Attributes};

/// How unspent points are split between defensive and offensive attributes.
///
/// Reserved amounts are granted in order, each capped by what remains; the
/// rest goes to `offense`.
#[derive(Clone, Debug, PartialEq)]
pub struct StatSplit {
    pub reserved: Vec<(AttributeKind, f64)>,
    pub offense: AttributeKind,
}

impl StatSplit {
    /// Reserves `points` for slash and then pierce resistance.
    pub fn resists(points: f64, offense: AttributeKind) -> Self {
        Self {
            reserved: vec![
                (AttributeKind::SlashResist, points),
                (AttributeKind::PierceResist, points),
            ],
            offense,
        }
    }
}

impl Default for StatSplit {
    fn default() -> Self {
        Self::resists(5.0, AttributeKind::Strength)
    }
}

/// Builds the allocation request that spends all `points`.
///
/// Returns `None` when there is nothing to spend.
pub fn allocate(points: f64, split: &StatSplit) -> Option<Attributes> {
    if points <= 0.0 {
        return None;
    }

    let mut remaining = points;
    let mut request = Attributes::new();
    for &(kind, amount) in &split.reserved {
        let granted = amount.max(0.0).min(remaining);
        if granted > 0.0 {
            request.set(kind, Some(request.value(kind) + granted));
            remaining -= granted;
        }
    }
    if remaining > 0.0 {
        let kind = split.offense;
        request.set(kind, Some(request.value(kind) + remaining));
    }

    tracing::debug!("Allocating {} points: {:?}", points, request);
    Some(request)
}

//! The controlled character (and other players seen on the map).

use super::Item;
use crate::stats::{AttributeKind, Attributes};

/// Character sheet as reported by the server.
///
/// Other players standing on map tiles are decoded into the same type; for
/// them only `id` and `name` are meaningful.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Character {
    pub id: String,
    pub name: String,
    pub attributes: Attributes,
    pub max_attributes: Attributes,
    pub money: u32,
    /// Unspent points available for [`AttributeKind`] allocation.
    pub skill_points: f64,
    /// Equipped items, at most one per slot.
    pub equip: Vec<Item>,
    /// Ticks elapsed since the character last took damage.
    pub last_damage_taken: i64,
}

impl Character {
    /// Current value of a resource-like attribute (life, stamina, mana).
    pub fn current(&self, kind: AttributeKind) -> f64 {
        self.attributes.value(kind)
    }

    /// Maximum value of a resource-like attribute.
    pub fn maximum(&self, kind: AttributeKind) -> f64 {
        self.max_attributes.value(kind)
    }

    /// Returns true if the resource is below its maximum.
    pub fn is_depleted(&self, kind: AttributeKind) -> bool {
        self.current(kind) < self.maximum(kind)
    }

    /// Returns true if nothing is equipped yet.
    pub fn is_unequipped(&self) -> bool {
        self.equip.is_empty()
    }

    /// Sorted ids of the equipped items.
    pub fn equipment_signature(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.equip.iter().map(|item| item.id.clone()).collect();
        ids.sort();
        ids
    }
}

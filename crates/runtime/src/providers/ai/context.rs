//! Per-tick planning context.
//!
//! The [`PlanningContext`] is the "blackboard" every planner rule reads from.
//! It provides:
//!
//! - Read access to the snapshot and the current level
//! - The distance field, indexed once per tick
//! - Helper methods over the controlled character

use game_core::{
    AttributeKind, Attributes, Character, DistanceField, GameState, Item, Level, Position, Slot,
};

/// Read-only view of one snapshot.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the snapshot it was built from;
/// planning happens synchronously between fetching and acting.
pub struct PlanningContext<'a> {
    pub state: &'a GameState,
    /// Current level, `None` if the server revealed no map.
    pub level: Option<&'a Level>,
    /// Distance field of the current level (empty without a level).
    pub field: DistanceField,
}

impl<'a> PlanningContext<'a> {
    pub fn new(state: &'a GameState) -> Self {
        let level = state.level();
        let field = level.map(Level::distance_field).unwrap_or_default();
        Self {
            state,
            level,
            field,
        }
    }

    pub fn character(&self) -> &'a Character {
        &self.state.character
    }

    pub fn attrs(&self) -> &'a Attributes {
        &self.state.character.attributes
    }

    pub fn position(&self) -> Position {
        self.state.current_position
    }

    /// Equipped items in the order the server reports them.
    pub fn equipped(&self) -> &'a [Item] {
        &self.state.character.equip
    }

    /// Equipped items occupying `slot`.
    pub fn items_in(&self, slot: Slot) -> impl Iterator<Item = &'a Item> + use<'a> {
        self.equipped().iter().filter(move |item| item.slot == slot)
    }

    /// Returns true if the character was hit within the last `cooldown` ticks.
    pub fn recently_hit(&self, cooldown: i64) -> bool {
        self.state.character.last_damage_taken <= cooldown
    }

    /// Returns true if the resource is below its maximum.
    pub fn is_depleted(&self, kind: AttributeKind) -> bool {
        self.state.character.is_depleted(kind)
    }

    /// Walking distance to a tile ([`DistanceField::UNREACHABLE`] if unknown).
    pub fn distance_to(&self, position: Position) -> i32 {
        self.field.distance(position)
    }

    pub fn can_see(&self, position: Position) -> bool {
        self.field.line_of_sight(position)
    }
}

//! State the agent carries between ticks.
//!
//! Everything else is re-derived from the freshest snapshot; memory resets on
//! restart.

use game_core::Character;

/// Tracked target and last observed equipment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentMemory {
    target: Option<String>,
    equipment: Option<Vec<String>>,
}

impl AgentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the monster being pursued, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn track(&mut self, monster_id: impl Into<String>) {
        let id = monster_id.into();
        tracing::debug!("Tracking monster {}", id);
        self.target = Some(id);
    }

    /// Forgets the tracked monster so the next decision re-acquires one.
    pub fn clear_target(&mut self) {
        if let Some(id) = self.target.take() {
            tracing::debug!("Dropping target {}", id);
        }
    }

    /// Records the equipped item set and reports whether it changed.
    ///
    /// The first observation counts as a change.
    pub fn observe_equipment(&mut self, character: &Character) -> bool {
        let signature = character.equipment_signature();
        if self.equipment.as_ref() == Some(&signature) {
            return false;
        }

        let names: Vec<&str> = character.equip.iter().map(|item| item.name.as_str()).collect();
        tracing::info!("Equipment: [{}]", names.join(", "));
        self.equipment = Some(signature);
        true
    }
}

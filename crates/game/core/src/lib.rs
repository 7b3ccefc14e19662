//! Data model of the remote dungeon and pure scoring helpers.
//!
//! `game-core` defines the read-only view the agent receives every tick
//! ([`GameState`]) and the stat-vector arithmetic shared by every decision
//! layer. Nothing in this crate performs I/O; the runtime and the transport
//! depend on the types re-exported here.
pub mod state;
pub mod stats;

pub use state::{
    Character, DamageType, DistanceEntry, DistanceField, DungeonMap, EffectFlags, GameState, Item,
    Level, MapObject, Monster, Portal, Position, Skill, SkillEffect, Slot, TargetKind,
};
pub use stats::{AttributeKind, Attributes, can_afford, compute_damage, requirements_satisfied};

//! Read-only world view delivered by the server each tick.
//!
//! The agent never mutates these structures: a fresh [`GameState`] is
//! fetched, every decision is derived from it, and it is dropped at the end
//! of the tick.
pub mod character;
pub mod common;
pub mod item;
pub mod map;
pub mod snapshot;

pub use character::Character;
pub use common::Position;
pub use item::{DamageType, EffectFlags, Item, Skill, SkillEffect, Slot, TargetKind};
pub use map::{DistanceEntry, DistanceField, DungeonMap, Level, MapObject, Monster, Portal};
pub use snapshot::GameState;

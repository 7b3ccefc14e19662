//! Shop catalog entries, equipped items, and the skills they grant.
//!
//! Items and skills are immutable: the shop lists them, the character equips
//! references to them, and the agent only reads them to score choices.

use strum::{Display, EnumIter};

use crate::stats::{AttributeKind, Attributes};

/// Equipment position category. A character holds at most one item per slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum Slot {
    #[default]
    MainHand,
    OffHand,
    Head,
    Body,
    Legs,
    Neck,
}

/// What a skill must be aimed at when invoked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum TargetKind {
    /// Self-cast, no payload.
    #[default]
    None,
    /// Aimed at a tile.
    Position,
    /// Aimed at a single character or monster id.
    Character,
}

/// Element of the damage a skill deals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum DamageType {
    #[default]
    None,
    Slash,
    Pierce,
    Fire,
    Poison,
    Electric,
}

/// Boolean side effects attached to a skill effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EffectFlags {
    /// The affected character is moved (charges, leaps, knockback-on-self).
    pub movement: bool,
    pub knockback: bool,
    pub stun: bool,
}

/// Attribute deltas and flags applied to the caster or the target.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SkillEffect {
    pub attributes: Attributes,
    pub flags: EffectFlags,
}

/// An ability granted by an equipped item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub target: TargetKind,
    /// Consumed per use; gates whether the skill is usable this tick.
    pub cost: Attributes,
    /// Stat-weighted reach, scored with the same dot product as damage.
    pub range: Attributes,
    pub damage_amount: Attributes,
    pub damage_type: DamageType,
    pub caster_effects: SkillEffect,
    pub target_effects: SkillEffect,
}

impl Skill {
    /// The skill relocates its caster.
    pub fn moves_caster(&self) -> bool {
        self.caster_effects.flags.movement
    }

    /// The skill restores stamina to its caster.
    pub fn restores_stamina(&self) -> bool {
        self.caster_effects.attributes.value(AttributeKind::Stamina) > 0.0
    }

    /// The skill restores life to its target.
    pub fn restores_life(&self) -> bool {
        self.target_effects.attributes.value(AttributeKind::Life) > 0.0
    }

    /// The skill's cost includes stamina.
    pub fn costs_stamina(&self) -> bool {
        self.cost.value(AttributeKind::Stamina) > 0.0
    }
}

/// Catalog entry or equipped item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Item {
    pub id: String,
    pub name: String,
    pub slot: Slot,
    pub price: u32,
    /// Minimums the character must meet to use the item.
    pub requirements: Attributes,
    /// Bonuses added to the character while equipped.
    pub attributes: Attributes,
    pub skills: Vec<Skill>,
}

impl Item {
    /// Returns true if any granted skill matches the predicate.
    pub fn grants(&self, predicate: impl Fn(&Skill) -> bool) -> bool {
        self.skills.iter().any(predicate)
    }
}

//! Named stat vector shared by characters, items, and skills.
//!
//! Every field is optional: the server omits fields it does not care about.
//! An absent field counts as zero when scoring damage and as "no requirement"
//! when gating item use, so the distinction between `None` and `Some(0.0)` is
//! kept intact instead of collapsing to a plain number.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The fixed set of attribute fields, in declaration order.
///
/// The order matters: the "dominant" field of a vector is the first one with
/// a nonzero weight when walking this enum front to back.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum AttributeKind {
    Strength,
    Dexterity,
    Intelligence,
    Willpower,
    Constitution,
    Life,
    Stamina,
    Mana,
    SlashResist,
    PierceResist,
    FireResist,
    PoisonResist,
    ElectricResist,
}

/// Stat vector as received from (or sent to) the game server.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Attributes {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub strength: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dexterity: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub intelligence: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub willpower: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub constitution: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub life: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub stamina: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mana: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub slash_resist: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pierce_resist: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fire_resist: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub poison_resist: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub electric_resist: Option<f64>,
}

impl Attributes {
    /// Creates a vector with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field (builder pattern).
    pub fn with(mut self, kind: AttributeKind, value: f64) -> Self {
        self.set(kind, Some(value));
        self
    }

    /// Returns the raw value of a field, `None` when absent.
    pub fn get(&self, kind: AttributeKind) -> Option<f64> {
        *self.slot(kind)
    }

    /// Returns a field with absent treated as zero.
    pub fn value(&self, kind: AttributeKind) -> f64 {
        self.get(kind).unwrap_or(0.0)
    }

    /// Overwrites a field.
    pub fn set(&mut self, kind: AttributeKind, value: Option<f64>) {
        *self.slot_mut(kind) = value;
    }

    /// Iterates over present fields in declaration order.
    pub fn present(&self) -> impl Iterator<Item = (AttributeKind, f64)> + '_ {
        AttributeKind::iter().filter_map(move |kind| self.get(kind).map(|value| (kind, value)))
    }

    /// First field (in declaration order) carrying a nonzero weight.
    ///
    /// Used to find the attribute that drives a skill's damage.
    pub fn dominant(&self) -> Option<AttributeKind> {
        self.present()
            .find(|(_, value)| *value != 0.0)
            .map(|(kind, _)| kind)
    }

    /// Sum of all present fields.
    pub fn total(&self) -> f64 {
        self.present().map(|(_, value)| value).sum()
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    fn slot(&self, kind: AttributeKind) -> &Option<f64> {
        match kind {
            AttributeKind::Strength => &self.strength,
            AttributeKind::Dexterity => &self.dexterity,
            AttributeKind::Intelligence => &self.intelligence,
            AttributeKind::Willpower => &self.willpower,
            AttributeKind::Constitution => &self.constitution,
            AttributeKind::Life => &self.life,
            AttributeKind::Stamina => &self.stamina,
            AttributeKind::Mana => &self.mana,
            AttributeKind::SlashResist => &self.slash_resist,
            AttributeKind::PierceResist => &self.pierce_resist,
            AttributeKind::FireResist => &self.fire_resist,
            AttributeKind::PoisonResist => &self.poison_resist,
            AttributeKind::ElectricResist => &self.electric_resist,
        }
    }

    fn slot_mut(&mut self, kind: AttributeKind) -> &mut Option<f64> {
        match kind {
            AttributeKind::Strength => &mut self.strength,
            AttributeKind::Dexterity => &mut self.dexterity,
            AttributeKind::Intelligence => &mut self.intelligence,
            AttributeKind::Willpower => &mut self.willpower,
            AttributeKind::Constitution => &mut self.constitution,
            AttributeKind::Life => &mut self.life,
            AttributeKind::Stamina => &mut self.stamina,
            AttributeKind::Mana => &mut self.mana,
            AttributeKind::SlashResist => &mut self.slash_resist,
            AttributeKind::PierceResist => &mut self.pierce_resist,
            AttributeKind::FireResist => &mut self.fire_resist,
            AttributeKind::PoisonResist => &mut self.poison_resist,
            AttributeKind::ElectricResist => &mut self.electric_resist,
        }
    }
}

//! Map tiles of the current level and the server-computed distance field.

use std::collections::HashMap;

use super::{Character, Position};

/// A monster occupying a tile.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Monster {
    pub id: String,
    pub name: String,
    /// Remaining life, 0-100.
    pub life_percentage: f64,
}

/// Portal payload of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Portal {
    pub destination_floor: i32,
}

/// A non-empty tile of the level and whatever stands on it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MapObject {
    pub position: Position,
    pub monsters: Vec<Monster>,
    pub players: Vec<Character>,
    pub is_stairs: bool,
    pub portal: Option<Portal>,
}

/// One entry of the distance field, relative to the character's position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DistanceEntry {
    pub position: Position,
    /// Shortest known walking distance; negative means unreachable.
    pub distance: i32,
    pub line_of_sight: bool,
}

/// A single dungeon floor.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Level {
    pub level: i32,
    /// Tiles in the server's declared order.
    pub objects: Vec<MapObject>,
    pub player_map: Vec<DistanceEntry>,
}

impl Level {
    /// Builds the lookup view over `player_map`.
    pub fn distance_field(&self) -> DistanceField {
        DistanceField::from_entries(&self.player_map)
    }
}

/// The part of the dungeon the server reveals.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DungeonMap {
    pub levels: Vec<Level>,
}

/// Per-tile distance and line-of-sight lookup.
#[derive(Clone, Debug, Default)]
pub struct DistanceField {
    entries: HashMap<Position, DistanceEntry>,
}

impl DistanceField {
    /// Distance reported for tiles outside the field or marked unreachable.
    pub const UNREACHABLE: i32 = 1000;

    /// Indexes the entries by position; the first entry for a tile wins.
    pub fn from_entries(entries: &[DistanceEntry]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.entry(entry.position).or_insert(*entry);
        }
        Self { entries: map }
    }

    /// Distance to a tile, [`Self::UNREACHABLE`] if unknown.
    pub fn distance(&self, position: Position) -> i32 {
        match self.entries.get(&position) {
            Some(entry) if entry.distance >= 0 => entry.distance,
            _ => Self::UNREACHABLE,
        }
    }

    /// Whether the tile is visible from the character's position.
    pub fn line_of_sight(&self, position: Position) -> bool {
        self.entries
            .get(&position)
            .is_some_and(|entry| entry.line_of_sight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

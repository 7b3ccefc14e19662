use super::{Character, DungeonMap, Item, Level, Position};

/// Everything the agent knows for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GameState {
    pub character: Character,
    pub current_position: Position,
    pub current_level: i32,
    pub shop_items: Vec<Item>,
    pub map: DungeonMap,
}

impl GameState {
    /// The level the character is standing on.
    ///
    /// The server lists the current level first.
    pub fn level(&self) -> Option<&Level> {
        self.map.levels.first()
    }
}

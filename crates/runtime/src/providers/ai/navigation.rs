//! Target and destination resolution on the current level.
//!
//! All queries walk `Level::objects` in the server's declared order, so every
//! tie is broken in favour of the tile listed first.

use game_core::{DistanceField, Level, Monster, Position};

/// Nearest monster by walking distance.
///
/// Monsters on unreachable tiles are still candidates (at distance
/// [`DistanceField::UNREACHABLE`]) so the agent keeps a target while the
/// server has not yet revealed a path.
pub fn nearest_monster<'a>(
    level: &'a Level,
    field: &DistanceField,
) -> Option<(&'a Monster, Position)> {
    let mut best: Option<(&'a Monster, Position, i32)> = None;
    for object in &level.objects {
        let Some(monster) = object.monsters.first() else {
            continue;
        };
        let distance = field.distance(object.position);
        if best.is_none_or(|(_, _, top)| distance < top) {
            best = Some((monster, object.position, distance));
        }
    }
    best.map(|(monster, position, _)| (monster, position))
}

/// Locates a tracked monster by id.
pub fn find_monster<'a>(level: &'a Level, id: &str) -> Option<(&'a Monster, Position)> {
    level.objects.iter().find_map(|object| {
        object
            .monsters
            .iter()
            .find(|monster| monster.id == id)
            .map(|monster| (monster, object.position))
    })
}

/// Position of the first stairs tile.
pub fn stairs(level: &Level) -> Option<Position> {
    level
        .objects
        .iter()
        .find(|object| object.is_stairs)
        .map(|object| object.position)
}

/// The portal leading to the deepest floor; first listed wins ties.
pub fn best_portal(level: &Level) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for object in &level.objects {
        let Some(portal) = object.portal else {
            continue;
        };
        if best.is_none_or(|(_, floor)| portal.destination_floor > floor) {
            best = Some((object.position, portal.destination_floor));
        }
    }
    best.map(|(position, _)| position)
}

/// Whether two positions are the same tile.
pub fn same_tile(a: Position, b: Position) -> bool {
    a == b
}

/// Parameters of the wait-at-stairs rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StairsRules {
    /// Manhattan distance to the stairs within which the agent considers
    /// waiting for others.
    pub wait_radius: u32,
    /// A player further than this from the stairs is a straggler.
    pub straggler_distance: u32,
}

impl Default for StairsRules {
    fn default() -> Self {
        Self {
            wait_radius: 1,
            straggler_distance: 2,
        }
    }
}

/// What to do when the level has no monsters left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StairsVerdict {
    /// Walk onto the stairs.
    Advance,
    /// Hold position; `straggler` is still far from the stairs.
    Wait { straggler: String, distance: u32 },
}

/// Decides whether to step onto the stairs or wait for a lagging teammate.
///
/// The agent only waits when it is already next to the stairs. The farthest
/// other player beyond the straggler distance is the one named.
pub fn stairs_verdict(
    level: &Level,
    self_id: &str,
    position: Position,
    stairs: Position,
    rules: StairsRules,
) -> StairsVerdict {
    if position.manhattan_distance(stairs) > rules.wait_radius {
        return StairsVerdict::Advance;
    }

    let mut farthest: Option<(&str, u32)> = None;
    for object in &level.objects {
        let distance = object.position.manhattan_distance(stairs);
        if distance <= rules.straggler_distance {
            continue;
        }
        for player in object.players.iter().filter(|player| player.id != self_id) {
            if farthest.is_none_or(|(_, top)| distance > top) {
                let label = if player.name.is_empty() {
                    player.id.as_str()
                } else {
                    player.name.as_str()
                };
                farthest = Some((label, distance));
            }
        }
    }

    match farthest {
        Some((straggler, distance)) => StairsVerdict::Wait {
            straggler: straggler.to_string(),
            distance,
        },
        None => StairsVerdict::Advance,
    }
}

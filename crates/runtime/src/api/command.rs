//! Mutating requests the agent can issue in a tick.

use game_core::{Attributes, Position, Skill, TargetKind};

/// Target payload of a skill invocation.
///
/// Mirrors [`TargetKind`]: the variant is chosen from the skill's declared
/// target kind, never guessed by the caller of the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkillTarget {
    None,
    Character(String),
    Position(Position),
}

/// A skill invocation ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillUse {
    pub skill_id: String,
    pub skill_name: String,
    pub target: SkillTarget,
}

impl SkillUse {
    /// Aims a skill at a monster or player standing on `position`.
    pub fn at(skill: &Skill, character_id: &str, position: Position) -> Self {
        let target = match skill.target {
            TargetKind::None => SkillTarget::None,
            TargetKind::Character => SkillTarget::Character(character_id.to_string()),
            TargetKind::Position => SkillTarget::Position(position),
        };
        Self {
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            target,
        }
    }
}

/// One mutating round trip.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Spend unspent skill points.
    AssignStatPoints(Attributes),
    /// Purchase and equip catalog items.
    Buy(Vec<String>),
    /// Step toward (or into) a tile.
    Move(Position),
    UseSkill(SkillUse),
}

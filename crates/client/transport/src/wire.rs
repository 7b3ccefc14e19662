//! Request bodies sent to the game server.
//!
//! Snapshots decode directly into [`game_core`] types (enabled by its `serde`
//! feature); only outgoing payloads need their own shapes.

use game_core::Position;
use runtime::{SkillTarget, SkillUse};
use serde::Serialize;

/// Body of `POST /v1/skill`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillUseBody<'a> {
    pub skill_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl<'a> From<&'a SkillUse> for SkillUseBody<'a> {
    fn from(usage: &'a SkillUse) -> Self {
        let (target_id, position) = match &usage.target {
            SkillTarget::None => (None, None),
            SkillTarget::Character(id) => (Some(id.as_str()), None),
            SkillTarget::Position(position) => (None, Some(*position)),
        };
        Self {
            skill_id: &usage.skill_id,
            target_id,
            position,
        }
    }
}

/// Body of `POST /v1/buy`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifiers<'a> {
    pub ids: &'a [String],
}

/// Body of `POST /v1/yell`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub text: String,
}

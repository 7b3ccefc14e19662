//! Asynchronous abstraction over the remote game server.
//!
//! The runtime only talks to the world through [`GameService`], so the
//! decision loop can run against the HTTP client, an in-memory fake, or a
//! recorded fixture.
use async_trait::async_trait;
use game_core::{Attributes, GameState, Position};

use super::command::SkillUse;
use super::errors::Result;

/// Remote game boundary.
///
/// Every method except [`GameService::broadcast`] is awaited by the caller
/// before anything else happens in the tick.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Fetch the full world view for the current tick.
    async fn fetch_state(&self) -> Result<GameState>;

    /// Request a step toward (or into) a tile.
    async fn move_to(&self, position: Position) -> Result<()>;

    /// Invoke a skill with the payload its target kind requires.
    async fn use_skill(&self, skill: &SkillUse) -> Result<()>;

    /// Purchase and equip a set of catalog items.
    async fn buy(&self, item_ids: &[String]) -> Result<()>;

    /// Spend unspent skill points according to an attribute vector.
    async fn assign_stat_points(&self, points: &Attributes) -> Result<()>;

    /// Fire-and-forget chat message. Failures are swallowed by the
    /// implementation and never reach the caller.
    fn broadcast(&self, text: String);
}

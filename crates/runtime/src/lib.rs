//! Runtime orchestration for the dungeon agent.
//!
//! This crate wires the decision core to the remote game boundary. Consumers
//! embed [`Runtime`] with any [`GameService`] implementation and let it drive
//! the fetch → decide → act loop.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the service boundary, commands, and errors
//! - [`providers`] holds the decision core (gear, skills, navigation, planner)
pub mod api;
pub mod providers;
pub mod runtime;

pub use api::{
    Command, GameService, Result, RuntimeError, ServiceError, SkillTarget, SkillUse,
};
pub use providers::ai::{
    AgentMemory, Decision, Planner, PlannerConfig, Purchase, Rule, SkillSelector, StairsRules,
    StatSplit,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, TickOutcome};

//! Rule-based decision core for the dungeon agent.
//!
//! This module turns one snapshot into at most one request:
//!
//! 1. **Context**: index the snapshot once (current level, distance field)
//! 2. **Selection**: pure selectors score gear, skills, and destinations
//! 3. **Planning**: [`Planner`] walks its priority rules and returns a
//!    [`Decision`]
//!
//! # Core Components
//!
//! - [`Planner`]: priority-ordered rules producing a [`Decision`]
//! - [`select_gear`]: budget-constrained starting gear optimizer
//! - [`SkillSelector`]: picks the skill for each intent
//! - [`navigation`]: target, portal, and stairs resolution
//! - [`AgentMemory`]: target and equipment carried between ticks
//! - [`PlanningContext`]: shared read-only view used by every rule

pub mod context;
pub mod gear;
pub mod memory;
pub mod navigation;
pub mod planner;
pub mod skills;
pub mod stats;

// Re-export public API
pub use context::PlanningContext;
pub use gear::{Purchase, select_gear};
pub use memory::AgentMemory;
pub use navigation::{StairsRules, StairsVerdict};
pub use planner::{Decision, Planner, PlannerConfig, Rule};
pub use skills::{DamageFilter, DamageQuery, SkillSelector};
pub use stats::{StatSplit, allocate};

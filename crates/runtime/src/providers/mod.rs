//! Decision providers for the agent.

pub mod ai;

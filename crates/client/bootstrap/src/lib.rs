//! Shared bootstrap utilities for the agent binary.
//!
//! Provides configuration loading and runtime setup, wiring the HTTP transport
//! into the runtime so front-ends only deal with a ready-to-run [`AgentSetup`].
pub mod builder;
pub mod config;

pub use builder::{AgentBuilder, AgentSetup};
pub use config::{AgentConfig, ConfigError, IgnoredVar};

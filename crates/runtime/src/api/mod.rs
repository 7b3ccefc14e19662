//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! the remote game boundary ([`GameService`]), the commands the agent issues
//! through it, and the error type every call returns.

pub mod command;
pub mod errors;
pub mod service;

pub use command::{Command, SkillTarget, SkillUse};
pub use errors::{Result, RuntimeError, ServiceError};
pub use service::GameService;

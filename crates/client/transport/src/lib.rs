//! HTTP transport for the dungeon agent.
//!
//! Implements [`runtime::GameService`] against the remote game server's JSON
//! API. The decision core never sees HTTP details; it only receives decoded
//! [`game_core::GameState`] snapshots and [`runtime::ServiceError`]s.
pub mod client;
pub mod wire;

pub use client::{HttpGameService, ServiceConfig};

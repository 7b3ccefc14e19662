//! Agent configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use game_core::AttributeKind;
use runtime::{PlannerConfig, RuntimeConfig, StairsRules, StatSplit};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Configuration required to bootstrap the agent.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub host: String,
    pub api_key: String,
    pub blocking_fetch: bool,
    pub regen_cooldown: i64,
    pub stairs_wait_radius: u32,
    pub straggler_distance: u32,
    pub stat_reserve_points: f64,
    pub stat_offense: AttributeKind,
    pub retry_delay_ms: u64,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Optional variables that were set but failed to parse; their defaults
    /// were kept.
    pub ignored: Vec<IgnoredVar>,
}

/// An optional variable whose value could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoredVar {
    pub key: &'static str,
    pub value: String,
}

impl AgentConfig {
    /// Defaults for everything except the endpoint and credential.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            blocking_fetch: true,
            regen_cooldown: 2,
            stairs_wait_radius: 1,
            straggler_distance: 2,
            stat_reserve_points: 5.0,
            stat_offense: AttributeKind::Strength,
            retry_delay_ms: 1000,
            session_id: None,
            log_dir: None,
            ignored: Vec::new(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HOST` - Game server base URL (required)
    /// - `API_KEY` - Access credential (required)
    /// - `BLOCKING_FETCH` - Hold state fetches until the next tick (default: true)
    /// - `REGEN_COOLDOWN` - Ticks without damage before regenerating (default: 2)
    /// - `STAIRS_WAIT_RADIUS` - Distance to stairs within which to wait (default: 1)
    /// - `STRAGGLER_DISTANCE` - Distance from stairs that makes a straggler (default: 2)
    /// - `STAT_RESERVE_POINTS` - Points reserved per resistance (default: 5)
    /// - `STAT_OFFENSE` - Attribute receiving remaining points (default: strength)
    /// - `RETRY_DELAY_MS` - Pause after a tick that made no progress (default: 1000)
    /// - `SESSION_ID` - Label for the log directory (default: timestamp)
    /// - `LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };
        let mut config = Self::new(required("HOST")?, required("API_KEY")?);
        let mut ignored = Vec::new();

        if let Some(blocking) = read_var::<bool>(&lookup, &mut ignored, "BLOCKING_FETCH") {
            config.blocking_fetch = blocking;
        }
        if let Some(cooldown) = read_var::<i64>(&lookup, &mut ignored, "REGEN_COOLDOWN") {
            config.regen_cooldown = cooldown;
        }
        if let Some(radius) = read_var::<u32>(&lookup, &mut ignored, "STAIRS_WAIT_RADIUS") {
            config.stairs_wait_radius = radius;
        }
        if let Some(distance) = read_var::<u32>(&lookup, &mut ignored, "STRAGGLER_DISTANCE") {
            config.straggler_distance = distance;
        }
        if let Some(points) = read_var::<f64>(&lookup, &mut ignored, "STAT_RESERVE_POINTS")
            .filter(|points| *points >= 0.0)
        {
            config.stat_reserve_points = points;
        }
        if let Some(kind) = read_var::<AttributeKind>(&lookup, &mut ignored, "STAT_OFFENSE") {
            config.stat_offense = kind;
        }
        if let Some(ms) = read_var::<u64>(&lookup, &mut ignored, "RETRY_DELAY_MS") {
            config.retry_delay_ms = ms;
        }

        config.session_id = lookup("SESSION_ID");
        config.log_dir = lookup("LOG_DIR").map(PathBuf::from);
        config.ignored = ignored;

        Ok(config)
    }

    /// Reports ignored variables; call once logging is installed.
    pub fn log_ignored(&self) {
        for var in &self.ignored {
            tracing::warn!("Ignoring invalid value for {}: {:?}", var.key, var.value);
        }
    }

    /// Runtime tunables derived from this configuration.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            planner: PlannerConfig {
                regen_cooldown: self.regen_cooldown,
                stairs: StairsRules {
                    wait_radius: self.stairs_wait_radius,
                    straggler_distance: self.straggler_distance,
                },
                stat_split: StatSplit::resists(self.stat_reserve_points, self.stat_offense),
            },
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

fn read_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    ignored: &mut Vec<IgnoredVar>,
    key: &'static str,
) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            ignored.push(IgnoredVar { key, value: raw });
            None
        }
    }
}

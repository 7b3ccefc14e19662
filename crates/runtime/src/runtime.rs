//! High-level runtime orchestrator.
//!
//! The runtime owns the game service, the planner, and the agent memory, and
//! drives the fetch → decide → act loop. It exposes a builder-based API so
//! clients can inject any [`GameService`] implementation.

use std::time::Duration;

use crate::api::{Command, GameService, RuntimeError, ServiceError};
use crate::providers::ai::{AgentMemory, Planner, PlannerConfig, Rule};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub planner: PlannerConfig,
    /// Pause before the next tick when a tick made no progress.
    pub retry_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            planner: PlannerConfig::default(),
            retry_delay: Duration::from_millis(1000),
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The rule issued a request and the service accepted it.
    Acted(Rule),
    /// The rule decided not to issue a request.
    Skipped(Rule),
    /// The rule's request failed; the next tick starts over.
    Failed(Rule),
    /// No snapshot this tick.
    FetchFailed,
}

impl TickOutcome {
    /// Returns false for ticks that neither acted nor changed memory; the
    /// loop pauses after those so a non-blocking fetch does not spin.
    pub fn made_progress(self) -> bool {
        !matches!(
            self,
            TickOutcome::FetchFailed | TickOutcome::Failed(_) | TickOutcome::Skipped(Rule::Idle)
        )
    }
}

/// Main runtime that drives the agent.
///
/// Design: one tick is one snapshot fetch followed by at most one mutating
/// request. Service failures never escape a tick.
pub struct Runtime {
    service: Box<dyn GameService>,
    planner: Planner,
    memory: AgentMemory,
    config: RuntimeConfig,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// State carried between ticks.
    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Execute a single tick.
    pub async fn step(&mut self) -> TickOutcome {
        let state = match self.service.fetch_state().await {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!("Failed to fetch game state: {}", error);
                return TickOutcome::FetchFailed;
            }
        };

        self.memory.observe_equipment(&state.character);
        let decision = self.planner.decide(&mut self.memory, &state);
        tracing::debug!("Tick on level {}: {}", state.current_level, decision.rule);

        if let Some(text) = decision.broadcast {
            self.service.broadcast(text);
        }

        let rule = decision.rule;
        let Some(command) = decision.command else {
            return TickOutcome::Skipped(rule);
        };

        match self.execute(&command).await {
            Ok(()) => TickOutcome::Acted(rule),
            Err(error) => {
                tracing::warn!("{} request failed: {}", rule, error);
                if matches!(rule, Rule::Engage | Rule::Charge) && error.is_rejection() {
                    self.memory.clear_target();
                }
                TickOutcome::Failed(rule)
            }
        }
    }

    /// Run the agent loop until the process is stopped.
    pub async fn run(&mut self) {
        tracing::info!("Agent loop started");
        loop {
            if !self.step().await.made_progress() {
                tokio::time::sleep(self.config.retry_delay).await;
            }
        }
    }

    async fn execute(&self, command: &Command) -> Result<(), ServiceError> {
        match command {
            Command::AssignStatPoints(points) => self.service.assign_stat_points(points).await,
            Command::Buy(item_ids) => self.service.buy(item_ids).await,
            Command::Move(position) => self.service.move_to(*position).await,
            Command::UseSkill(usage) => self.service.use_skill(usage).await,
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    service: Option<Box<dyn GameService>>,
    memory: AgentMemory,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            service: None,
            memory: AgentMemory::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required game service
    pub fn service(mut self, service: impl GameService + 'static) -> Self {
        self.service = Some(Box::new(service));
        self
    }

    /// Start from existing memory instead of a blank one
    pub fn memory(mut self, memory: AgentMemory) -> Self {
        self.memory = memory;
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime, RuntimeError> {
        let service = self.service.ok_or(RuntimeError::MissingService)?;
        Ok(Runtime {
            service,
            planner: Planner::new(self.config.planner.clone()),
            memory: self.memory,
            config: self.config,
        })
    }
}

//! Builds the runtime and transport bundle used by the agent binary.
use anyhow::Result;
use client_transport::{HttpGameService, ServiceConfig};
use runtime::Runtime;

use crate::config::AgentConfig;

/// Builder that assembles the transport, runtime, and configuration.
pub struct AgentBuilder {
    config: AgentConfig,
}

impl AgentBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<AgentSetup> {
        let service = HttpGameService::new(ServiceConfig {
            host: self.config.host.clone(),
            api_key: self.config.api_key.clone(),
            blocking: self.config.blocking_fetch,
        });

        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .service(service)
            .build()?;

        tracing::info!("Agent configured for {}", self.config.host);
        Ok(AgentSetup {
            config: self.config,
            runtime,
        })
    }
}

pub struct AgentSetup {
    pub config: AgentConfig,
    pub runtime: Runtime,
}

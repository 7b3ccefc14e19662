//! Dungeon agent binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. Logging to stderr and a per-session file
//! 3. The runtime wired to the HTTP game service
//!
//! The agent then polls the server forever; stop it externally.
//!
//! # Examples
//!
//! ```bash
//! HOST=https://dungeon.example API_KEY=secret cargo run -p dungeon-agent
//! ```

mod logging;

use anyhow::Result;
use client_bootstrap::{AgentBuilder, AgentConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = AgentConfig::from_env()?;

    // 2. Setup logging
    let _guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    tracing::info!("Starting dungeon agent");
    config.log_ignored();
    tracing::info!("Blocking fetch: {}", config.blocking_fetch);

    // 3. Build runtime and run
    let mut setup = AgentBuilder::new(config).build()?;
    setup.runtime.run().await;

    Ok(())
}

//! Minimal end-to-end run against live endpoints.
//!
//! ```sh
//! DATALINK_MODEL_URL=http://localhost:8080 \
//! DATALINK_DATA_SERVICE_URL=http://localhost:8081 \
//! cargo run --example basic_usage -- "What is the current temperature?"
//! ```

use anyhow::Context;
use llm_datalink::{Orchestrator, OrchestratorConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config =
        OrchestratorConfig::from_env().context("loading configuration from environment")?;
    let orchestrator = Orchestrator::new(config)?;

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What is the current temperature?".to_string());

    let answer = orchestrator.generate_response(&question).await?;
    println!("{answer}");
    Ok(())
}

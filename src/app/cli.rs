use crate::app::showcase::run_demo;
use crate::config::CliConfig;
use crate::utils::validation::Validate;
use anyhow::Context;

/// Resolve settings from the command line and run the selected showcase.
pub async fn run_cli(config: &CliConfig) -> anyhow::Result<()> {
    let settings = config
        .settings()
        .and_then(|s| s.validate().map(|_| s))
        .inspect_err(|e| tracing::error!("❌ {} ({})", e.user_friendly_message(), e))
        .context("Configuration failed")?;

    tracing::debug!("Resolved settings: {:?}", settings);

    run_demo(&settings)
        .await
        .inspect_err(|e| tracing::error!("❌ {}", e.user_friendly_message()))
        .context("Showcase failed")?;

    Ok(())
}

use clap::Parser;
use solid_showcase::utils::logger;
use solid_showcase::{run_cli, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting solid-showcase");
    tracing::debug!("CLI config: {:?}", config);

    run_cli(&config).await?;

    tracing::info!("✅ Done");
    Ok(())
}

use anyhow::Context;
use nhs_job_alerts::{config::Config, lifecycle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lifecycle::init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    lifecycle::run(config).await
}

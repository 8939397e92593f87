//! Process lifecycle: logging, service wiring, startup sequence and shutdown.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::db;
use crate::repository::sqlite::PostedJobRepository;
use crate::service::http::create_client;
use crate::service::notifier::{Notifier, TelegramNotifier, STARTUP_MESSAGE};
use crate::service::poller::{run_schedule, CycleOutcome, PollCycle};
use crate::service::{health, sites};

/// Initialize logging with tracing_subscriber.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,sqlx=warn,nhs_job_alerts=debug")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .with_ansi(true)
        .init();
}

/// Long-lived services built from configuration.
pub struct Services {
    pub cycle: Arc<PollCycle>,
    pub notifier: Arc<dyn Notifier>,
    pub store: Arc<PostedJobRepository>,
}

/// Open the dedup store and build adapters, notifier and poll cycle.
pub async fn build_services(config: &Config) -> Result<Services> {
    let pool = db::init_db(&config.database_path)
        .await
        .context("failed to initialize dedup store")?;
    let store = Arc::new(PostedJobRepository::new(pool));

    let client = create_client(config.http_timeout)?;
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        client.clone(),
        &config.telegram_api_base,
        &config.bot_token,
        config.chat_id.clone(),
    )?);
    let adapters = sites::default_adapters(&client)?;

    let cycle = Arc::new(PollCycle::new(adapters, store.clone(), notifier.clone()));

    Ok(Services {
        cycle,
        notifier,
        store,
    })
}

/// Startup sequence: health server, one immediate cycle, startup message,
/// then the periodic schedule until Ctrl-C.
pub async fn run(config: Config) -> Result<()> {
    let services = build_services(&config).await?;

    match services.store.count().await {
        Ok(count) => tracing::info!("{} postings already alerted on", count),
        Err(e) => tracing::warn!("Could not count posted jobs: {}", e),
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("failed to bind health endpoint on {}", addr))?;
    tracing::info!("[HEALTH] Listening on http://{}", addr);
    let health = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health::router()).await {
            tracing::error!("[HEALTH] Server stopped: {}", e);
        }
    });

    match services.cycle.run().await {
        Ok(CycleOutcome::Completed(report)) => {
            tracing::info!("Initial cycle complete: {} new postings", report.notified)
        }
        Ok(CycleOutcome::Skipped) => {}
        Err(e) => tracing::error!("Initial cycle aborted: {}", e),
    }

    if let Err(e) = services.notifier.send(STARTUP_MESSAGE).await {
        tracing::error!("[NOTIFY] Startup message failed: {}", e);
    }

    let schedule = tokio::spawn(run_schedule(services.cycle.clone(), config.poll_interval));

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("Shutdown requested");

    schedule.abort();
    health.abort();
    Ok(())
}

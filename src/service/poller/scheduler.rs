use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{CycleOutcome, PollCycle};

/// Trigger a poll cycle every `period`, starting one period from now.
///
/// Each tick spawns its own cycle task so a slow board never delays the
/// timer; a tick that lands on a running cycle is skipped by the cycle
/// itself. Runs until the surrounding task is dropped.
pub async fn run_schedule(cycle: Arc<PollCycle>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!("[SCHEDULER] Polling every {}s", period.as_secs());

    loop {
        ticker.tick().await;
        let cycle = cycle.clone();
        tokio::spawn(async move {
            match cycle.run().await {
                Ok(CycleOutcome::Completed(_)) => {}
                Ok(CycleOutcome::Skipped) => {
                    tracing::warn!("[SCHEDULER] Tick skipped, previous cycle still running")
                }
                Err(e) => tracing::error!("[SCHEDULER] Poll cycle aborted: {}", e),
            }
        });
    }
}

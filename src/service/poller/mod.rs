//! Poll cycle orchestration: fetch → filter → dedup → notify → mark.

mod scheduler;

pub use scheduler::run_schedule;

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::models::JobPosting;
use crate::error::Result;
use crate::repository::PostedJobStore;
use crate::service::notifier::Notifier;
use crate::service::recency::RecencyFilter;
use crate::service::sites::SiteAdapter;
use crate::service::title_filter::TitleFilter;

/// Counters for one completed cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub filtered_out: usize,
    pub already_posted: usize,
    pub notified: usize,
    pub delivery_failures: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Completed(CycleReport),
    /// Another cycle was still running; nothing was done.
    Skipped,
}

/// Runs every adapter and alerts on postings not seen before.
///
/// At most one cycle runs at a time: a trigger that arrives while a cycle
/// is in progress returns [`CycleOutcome::Skipped`] instead of queueing.
pub struct PollCycle {
    adapters: Vec<Arc<dyn SiteAdapter>>,
    store: Arc<dyn PostedJobStore>,
    notifier: Arc<dyn Notifier>,
    title_filter: TitleFilter,
    recency: RecencyFilter,
    running: Mutex<()>,
}

impl PollCycle {
    pub fn new(
        adapters: Vec<Arc<dyn SiteAdapter>>,
        store: Arc<dyn PostedJobStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            adapters,
            store,
            notifier,
            title_filter: TitleFilter::default(),
            recency: RecencyFilter::default(),
            running: Mutex::new(()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.try_lock().is_err()
    }

    /// Run one cycle dated today (UTC).
    pub async fn run(&self) -> Result<CycleOutcome> {
        self.run_on(Utc::now().date_naive()).await
    }

    /// Run one cycle with `today` as the reference date for the recency window.
    ///
    /// A dedup store failure aborts the cycle; postings handled before the
    /// failure stay marked.
    pub async fn run_on(&self, today: NaiveDate) -> Result<CycleOutcome> {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::warn!("[CYCLE] Previous cycle still running, skipping");
            return Ok(CycleOutcome::Skipped);
        };

        let started = std::time::Instant::now();
        let boards: Vec<&str> = self.adapters.iter().map(|a| a.site().as_str()).collect();
        tracing::info!("[CYCLE] Starting poll of {}", boards.join(", "));

        let batches = join_all(self.adapters.iter().map(|adapter| adapter.fetch())).await;

        let mut report = CycleReport::default();
        for posting in batches.into_iter().flatten() {
            report.fetched += 1;
            self.process(posting, today, &mut report).await?;
        }

        tracing::info!(
            "[CYCLE] Finished in {}ms: fetched={} filtered_out={} already_posted={} notified={} delivery_failures={}",
            started.elapsed().as_millis(),
            report.fetched,
            report.filtered_out,
            report.already_posted,
            report.notified,
            report.delivery_failures
        );

        Ok(CycleOutcome::Completed(report))
    }

    async fn process(
        &self,
        posting: JobPosting,
        today: NaiveDate,
        report: &mut CycleReport,
    ) -> Result<()> {
        if !self.title_filter.allowed(&posting.title)
            || !self.recency.passes(posting.date_posted.as_deref(), today)
        {
            report.filtered_out += 1;
            return Ok(());
        }

        if !self.store.is_new(posting.site, &posting.job_id).await? {
            report.already_posted += 1;
            return Ok(());
        }

        // Marked even when delivery fails so a flaky send never re-alerts every cycle
        if self.notifier.notify(&posting).await {
            report.notified += 1;
        } else {
            report.delivery_failures += 1;
        }
        self.store.mark_posted(posting.site, &posting.job_id).await?;

        tracing::info!("[CYCLE] New {} posting: {}", posting.site, posting.title);
        Ok(())
    }
}

pub mod sqlite;

use async_trait::async_trait;

use crate::domain::models::Site;
use crate::error::Result;

/// Record of postings already alerted on, keyed by `(site, job_id)`.
///
/// The poll cycle is the only caller and runs one check-then-mark pair at a
/// time, so implementations need no extra locking.
#[async_trait]
pub trait PostedJobStore: Send + Sync {
    /// True iff `(site, job_id)` has never been marked.
    async fn is_new(&self, site: Site, job_id: &str) -> Result<bool>;

    /// Record `(site, job_id)`. Marking an existing key is a no-op.
    async fn mark_posted(&self, site: Site, job_id: &str) -> Result<()>;
}

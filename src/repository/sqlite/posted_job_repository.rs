use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::models::Site;
use crate::error::Result;
use crate::repository::PostedJobStore;

pub struct PostedJobRepository {
    pool: SqlitePool,
}

impl PostedJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of postings ever alerted on.
    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posted_jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl PostedJobStore for PostedJobRepository {
    async fn is_new(&self, site: Site, job_id: &str) -> Result<bool> {
        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT 1 FROM posted_jobs WHERE site = ? AND job_id = ?",
        )
        .bind(site.as_str())
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(existing.is_none())
    }

    async fn mark_posted(&self, site: Site, job_id: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO posted_jobs (site, job_id) VALUES (?, ?)")
            .bind(site.as_str())
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Marked {} posting {} as posted", site, job_id);
        Ok(())
    }
}

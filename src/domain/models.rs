//! Job posting entities shared by the adapters, the filters and the store.

use sha2::{Digest, Sha256};
use std::fmt;

// ====== Enums ======

/// Job boards the service polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    NhsEngland,
    HealthJobsUk,
    NhsScotland,
    NhsJobs,
}

impl Site {
    /// Identifier persisted in the `posted_jobs.site` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::NhsEngland => "nhs_england",
            Site::HealthJobsUk => "healthjobsuk",
            Site::NhsScotland => "nhs_scotland",
            Site::NhsJobs => "nhsjobs",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ====== Postings ======

/// A single listing scraped from a job board during one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub site: Site,
    /// Hex SHA-256 of `link`.
    pub job_id: String,
    pub title: String,
    pub location: Option<String>,
    pub pay: Option<String>,
    pub date_posted: Option<String>,
    /// Absolute URL of the detail page.
    pub link: String,
}

impl JobPosting {
    /// Build a posting, deriving `job_id` from the canonical link.
    pub fn new(site: Site, title: impl Into<String>, link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            site,
            job_id: job_id_for_link(&link),
            title: title.into(),
            location: None,
            pay: None,
            date_posted: None,
            link,
        }
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_pay(mut self, pay: Option<String>) -> Self {
        self.pay = pay;
        self
    }

    pub fn with_date_posted(mut self, date_posted: Option<String>) -> Self {
        self.date_posted = date_posted;
        self
    }
}

/// Stable identifier for a listing: hex-encoded SHA-256 of its link.
pub fn job_id_for_link(link: &str) -> String {
    hex::encode(Sha256::digest(link.as_bytes()))
}

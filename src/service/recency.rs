//! Posting-date window applied before dedup.

use chrono::NaiveDate;

/// Format of the dates job boards print on result cards, e.g. `17 October 2026`.
pub const POSTED_DATE_FORMAT: &str = "%d %B %Y";

/// Postings older than this many days are dropped.
pub const MAX_POSTING_AGE_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy)]
pub struct RecencyFilter {
    max_age_days: i64,
}

impl RecencyFilter {
    pub fn new(max_age_days: i64) -> Self {
        Self { max_age_days }
    }

    /// Whether a posting with the given date text should be kept.
    ///
    /// Absent or blank dates pass, since some boards never print one.
    /// A date that does not parse is dropped.
    pub fn passes(&self, date_posted: Option<&str>, today: NaiveDate) -> bool {
        let Some(raw) = date_posted.map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        match parse_posted_date(raw) {
            Some(posted) => (today - posted).num_days() <= self.max_age_days,
            None => {
                tracing::debug!("[CYCLE] Unparseable posting date {:?}", raw);
                false
            }
        }
    }
}

/// Parse a `17 October 2026` style date.
///
/// chrono's `%B` also accepts abbreviations like `Oct`, so the month word
/// must match the full name of the parsed month.
fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    let posted = NaiveDate::parse_from_str(raw, POSTED_DATE_FORMAT).ok()?;
    let month = raw.split_whitespace().nth(1)?;
    let full_name = posted.format("%B").to_string();
    month.eq_ignore_ascii_case(&full_name).then_some(posted)
}

impl Default for RecencyFilter {
    fn default() -> Self {
        Self::new(MAX_POSTING_AGE_DAYS)
    }
}

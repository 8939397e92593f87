//! Markup shared by boards running on the HealthJobsUK platform
//! (healthjobsuk.com, nhsjobs.com, and the detail blocks on NHS Scotland).

use scraper::{ElementRef, Selector};
use std::sync::OnceLock;
use url::Url;

use super::{cached_selector, CardDetails, CardHeading};
use crate::error::Result;
use crate::extractor::CardExtractor;

/// `GET /job_list` with the platform's fixed search form fields.
pub(super) fn job_list_url(base: &Url, keyword: &str, page: u32, ts: &str) -> Result<Url> {
    let mut url = base.join("/job_list")?;
    url.query_pairs_mut()
        .append_pair("JobSearch_q", keyword)
        .append_pair("JobSearch_d", "")
        .append_pair("JobSearch_g", "")
        .append_pair("JobSearch_re", "_POST")
        .append_pair("JobSearch_re_0", "1")
        .append_pair("JobSearch_re_1", "1-_-_-")
        .append_pair("JobSearch_re_2", "1-_-_--_-_-")
        .append_pair("JobSearch_Submit", "Search")
        .append_pair("_tr", "JobSearch")
        .append_pair("_ts", ts)
        .append_pair("_pg", &page.to_string())
        .append_pair("_pgid", "");
    Ok(url)
}

/// Each result is an `<a class="clearfix">` wrapping the whole card.
pub(super) fn card_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    cached_selector(&SELECTOR, "a.clearfix")
}

pub(super) fn heading(card: ElementRef<'_>) -> Option<CardHeading> {
    static TITLE: OnceLock<Selector> = OnceLock::new();
    let title = CardExtractor::select_text(
        card,
        cached_selector(&TITLE, "div.hj-jobtitle.hj-job-detail"),
    )?;
    let href = CardExtractor::href(card)?;
    Some(CardHeading { title, href })
}

pub(super) fn location(card: ElementRef<'_>) -> Option<String> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    CardExtractor::select_text(
        card,
        cached_selector(&SELECTOR, "div.hj-locationtown.hj-job-detail"),
    )
}

pub(super) fn pay(card: ElementRef<'_>) -> Option<String> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    CardExtractor::select_text(card, cached_selector(&SELECTOR, "div.hj-salary.hj-job-detail"))
}

pub(super) fn date_posted(card: ElementRef<'_>) -> Option<String> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    CardExtractor::select_text(card, cached_selector(&SELECTOR, "div.hj-job-date"))
}

pub(super) fn details(card: ElementRef<'_>) -> CardDetails {
    CardDetails {
        location: location(card),
        pay: pay(card),
        date_posted: date_posted(card),
    }
}

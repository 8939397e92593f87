use scraper::{ElementRef, Selector};
use std::sync::OnceLock;
use url::Url;

use super::{cached_selector, hj_platform, BoardLayout, BoardScraper, CardDetails, CardHeading};
use crate::domain::models::Site;
use crate::error::Result;
use crate::extractor::CardExtractor;

/// apply.jobs.scot.nhs.uk. Result rows never show a posting date, so these
/// postings always pass the recency window.
pub struct NhsScotlandLayout;

pub type NhsScotland = BoardScraper<NhsScotlandLayout>;

impl BoardLayout for NhsScotlandLayout {
    const SITE: Site = Site::NhsScotland;
    const BASE_URL: &'static str = "https://apply.jobs.scot.nhs.uk";
    const MAX_PAGES: u32 = 2;
    const KEYWORDS: &'static [&'static str] = &[
        "Clinical Dev Fellow (FHO1)",
        "Clinical Dev Fellow (FHO2)",
        "Clinical Development Fellow",
        "Clinical Fellow",
        "Clinical Teaching Fellow",
        "LAS-FY2",
        "SHO",
        "LAT",
        "LAS",
        "LED",
    ];

    fn search_url(base: &Url, keyword: &str, page: u32) -> Result<Url> {
        let mut url = base.join("/Home/Job")?;
        url.query_pairs_mut()
            .append_pair("JobSearch_q", keyword)
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn card_selector() -> &'static Selector {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        cached_selector(&SELECTOR, "div.job-row.details")
    }

    fn heading(card: ElementRef<'_>) -> Option<CardHeading> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let anchor = card
            .select(cached_selector(&SELECTOR, r#"a.mb-15[data-testid^="a-job-detail"]"#))
            .next()?;
        Some(CardHeading {
            title: CardExtractor::text(anchor)?,
            href: CardExtractor::href(anchor)?,
        })
    }

    fn details(card: ElementRef<'_>) -> CardDetails {
        CardDetails {
            location: hj_platform::location(card),
            pay: hj_platform::pay(card),
            date_posted: None,
        }
    }
}

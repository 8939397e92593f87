use scraper::{ElementRef, Selector};
use std::sync::OnceLock;
use url::Url;

use super::{cached_selector, BoardLayout, BoardScraper, CardDetails, CardHeading};
use crate::domain::models::Site;
use crate::error::Result;
use crate::extractor::CardExtractor;

/// jobs.nhs.uk. Search result cards carry no salary.
pub struct NhsEnglandLayout;

pub type NhsEngland = BoardScraper<NhsEnglandLayout>;

impl BoardLayout for NhsEnglandLayout {
    const SITE: Site = Site::NhsEngland;
    const BASE_URL: &'static str = "https://www.jobs.nhs.uk";
    const MAX_PAGES: u32 = 2;
    const KEYWORDS: &'static [&'static str] = &[
        "Trust Grade FY2 Doctor",
        "SHO (Senior House Officer)",
        "Junior Clinical Fellow",
        "Clinical Fellow (ST1/ST2 Level)",
        "Clinical Fellow",
        "Junior Doctor",
        "Foundation Year 2 Equivalent",
        "Locally Employed Doctor (LED)",
        "Clinical Teaching Fellow",
        "Trust Doctor",
        "LAT",
        "LAS",
        "LED",
    ];

    fn search_url(base: &Url, keyword: &str, page: u32) -> Result<Url> {
        let mut url = base.join("/candidate/search/results")?;
        url.query_pairs_mut()
            .append_pair("keyword", keyword)
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn card_selector() -> &'static Selector {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        cached_selector(&SELECTOR, r#"li[data-test="search-result"]"#)
    }

    fn heading(card: ElementRef<'_>) -> Option<CardHeading> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let anchor = card
            .select(cached_selector(&SELECTOR, r#"a[data-test="search-result-job-title"]"#))
            .next()?;
        Some(CardHeading {
            title: CardExtractor::text(anchor)?,
            href: CardExtractor::href(anchor)?,
        })
    }

    fn details(card: ElementRef<'_>) -> CardDetails {
        static LOCATION: OnceLock<Selector> = OnceLock::new();
        static DATE: OnceLock<Selector> = OnceLock::new();
        CardDetails {
            location: CardExtractor::select_text(
                card,
                cached_selector(&LOCATION, r#"div[data-test="search-result-location"]"#),
            ),
            pay: None,
            date_posted: CardExtractor::select_text(
                card,
                cached_selector(&DATE, r#"li[data-test="search-result-publicationDate"] strong"#),
            ),
        }
    }
}

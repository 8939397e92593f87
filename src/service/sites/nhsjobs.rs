use scraper::{ElementRef, Selector};
use url::Url;

use super::{hj_platform, BoardLayout, BoardScraper, CardDetails, CardHeading};
use crate::domain::models::Site;
use crate::error::Result;

pub struct NhsJobsLayout;

pub type NhsJobs = BoardScraper<NhsJobsLayout>;

impl BoardLayout for NhsJobsLayout {
    const SITE: Site = Site::NhsJobs;
    const BASE_URL: &'static str = "https://www.nhsjobs.com";
    const MAX_PAGES: u32 = 5;
    const KEYWORDS: &'static [&'static str] = &[
        "SHO",
        "Senior House Officer",
        "Junior Clinical Fellow",
        "Clinical Fellow",
        "Clinical Research Fellow",
        "Junior Doctor",
        "Locally Employed Doctor",
        "Clinical Teaching Fellow",
        "Trust Grade Doctor",
        "Trust Doctor",
        "LAT",
        "LAS",
        "LED",
    ];

    fn search_url(base: &Url, keyword: &str, page: u32) -> Result<Url> {
        hj_platform::job_list_url(base, keyword, page, "300267")
    }

    fn card_selector() -> &'static Selector {
        hj_platform::card_selector()
    }

    fn heading(card: ElementRef<'_>) -> Option<CardHeading> {
        hj_platform::heading(card)
    }

    fn details(card: ElementRef<'_>) -> CardDetails {
        hj_platform::details(card)
    }
}

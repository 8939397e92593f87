use scraper::{ElementRef, Selector};
use url::Url;

use super::{hj_platform, BoardLayout, BoardScraper, CardDetails, CardHeading};
use crate::domain::models::Site;
use crate::error::Result;

pub struct HealthJobsUkLayout;

pub type HealthJobsUk = BoardScraper<HealthJobsUkLayout>;

impl BoardLayout for HealthJobsUkLayout {
    const SITE: Site = Site::HealthJobsUk;
    const BASE_URL: &'static str = "https://www.healthjobsuk.com";
    const MAX_PAGES: u32 = 2;
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
        hj_platform::job_list_url(base, keyword, page, "863")
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

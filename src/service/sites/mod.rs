//! Job board adapters.
//!
//! Every board is scraped by the same [`BoardScraper`] loop:
//! keywords × pages, stop paging a keyword on a non-success status, a
//! network failure or an empty page, title filter before anything else,
//! and one posting per distinct link per `fetch()`. A board only supplies
//! a [`BoardLayout`]: its endpoint, pagination cap and card selectors.

mod hj_platform;
mod healthjobsuk;
mod nhs_england;
mod nhs_scotland;
mod nhsjobs;

pub use healthjobsuk::{HealthJobsUk, HealthJobsUkLayout};
pub use nhs_england::{NhsEngland, NhsEnglandLayout};
pub use nhs_scotland::{NhsScotland, NhsScotlandLayout};
pub use nhsjobs::{NhsJobs, NhsJobsLayout};

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};
use url::Url;

use crate::domain::models::{JobPosting, Site};
use crate::error::{AppError, Result};
use crate::extractor::CardExtractor;
use crate::service::title_filter::TitleFilter;

/// A job board the poll cycle can scrape.
#[async_trait]
pub trait SiteAdapter: Send + Sync {
    fn site(&self) -> Site;

    /// Scrape every configured keyword and page. Never fails: request
    /// errors cut the current keyword short and the board simply yields
    /// fewer postings.
    async fn fetch(&self) -> Vec<JobPosting>;
}

/// Required part of a result card.
#[derive(Debug, Clone)]
pub struct CardHeading {
    pub title: String,
    pub href: String,
}

/// Optional part of a result card, looked up only for cards whose title
/// passed the filter.
#[derive(Debug, Clone, Default)]
pub struct CardDetails {
    pub location: Option<String>,
    pub pay: Option<String>,
    pub date_posted: Option<String>,
}

/// Board-specific endpoint and markup.
pub trait BoardLayout: Send + Sync + 'static {
    const SITE: Site;
    const BASE_URL: &'static str;
    const MAX_PAGES: u32;
    const KEYWORDS: &'static [&'static str];

    fn search_url(base: &Url, keyword: &str, page: u32) -> Result<Url>;

    fn card_selector() -> &'static Selector;

    fn heading(card: ElementRef<'_>) -> Option<CardHeading>;

    fn details(card: ElementRef<'_>) -> CardDetails;
}

/// Parse a CSS selector once and cache it in `cell`.
pub(crate) fn cached_selector(cell: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).unwrap())
}

/// Shared pagination/filter/dedup loop parameterized by a [`BoardLayout`].
pub struct BoardScraper<L: BoardLayout> {
    client: Client,
    base_url: Url,
    keywords: &'static [&'static str],
    max_pages: u32,
    title_filter: TitleFilter,
    _layout: PhantomData<fn() -> L>,
}

impl<L: BoardLayout> BoardScraper<L> {
    pub fn new(client: Client) -> Result<Self> {
        Self::with_base_url(client, L::BASE_URL)
    }

    /// Scrape a mirror of the board (used against mock servers in tests).
    pub fn with_base_url(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            client,
            base_url,
            keywords: L::KEYWORDS,
            max_pages: L::MAX_PAGES,
            title_filter: TitleFilter::default(),
            _layout: PhantomData,
        })
    }

    pub fn with_keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn into_adapter(self) -> Arc<dyn SiteAdapter> {
        Arc::new(self)
    }

    /// `Ok(None)` when the board answered with a non-success status.
    async fn fetch_page(&self, url: &Url) -> Result<Option<String>> {
        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("[SCRAPE] {} answered HTTP {} for {}", L::SITE, status, url);
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }

    /// Append the page's new, title-matching postings to `out` and return how
    /// many cards the page held (matching or not).
    fn collect_page(
        &self,
        body: &str,
        seen: &mut HashSet<String>,
        out: &mut Vec<JobPosting>,
    ) -> usize {
        let document = Html::parse_document(body);
        let mut cards = 0;

        for card in document.select(L::card_selector()) {
            cards += 1;

            let Some(heading) = L::heading(card) else {
                continue;
            };
            if !self.title_filter.allowed(&heading.title) {
                continue;
            }
            let Some(link) = CardExtractor::resolve_link(&self.base_url, &heading.href) else {
                tracing::trace!("[SCRAPE] Unresolvable link {:?}", heading.href);
                continue;
            };
            if !seen.insert(link.clone()) {
                continue;
            }

            let details = L::details(card);
            out.push(
                JobPosting::new(L::SITE, heading.title, link)
                    .with_location(details.location)
                    .with_pay(details.pay)
                    .with_date_posted(details.date_posted),
            );
        }

        cards
    }
}

#[async_trait]
impl<L: BoardLayout> SiteAdapter for BoardScraper<L> {
    fn site(&self) -> Site {
        L::SITE
    }

    async fn fetch(&self) -> Vec<JobPosting> {
        let mut seen = HashSet::new();
        let mut postings = Vec::new();

        for keyword in self.keywords {
            for page in 1..=self.max_pages {
                let url = match L::search_url(&self.base_url, keyword, page) {
                    Ok(url) => url,
                    Err(e) => {
                        tracing::warn!("[SCRAPE] {} cannot build search URL: {}", L::SITE, e);
                        break;
                    }
                };

                let body = match self.fetch_page(&url).await {
                    Ok(Some(body)) => body,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(
                            "[SCRAPE] {} keyword {:?} page {} failed: {}",
                            L::SITE,
                            keyword,
                            page,
                            e
                        );
                        break;
                    }
                };

                let before = postings.len();
                let cards = self.collect_page(&body, &mut seen, &mut postings);
                tracing::debug!(
                    "[SCRAPE] {} {:?} p{}: {} cards, {} new matches",
                    L::SITE,
                    keyword,
                    page,
                    cards,
                    postings.len() - before
                );
                if cards == 0 {
                    break;
                }
            }
        }

        tracing::info!("[SCRAPE] {} yielded {} postings", L::SITE, postings.len());
        postings
    }
}

/// All four boards against their live endpoints.
pub fn default_adapters(client: &Client) -> Result<Vec<Arc<dyn SiteAdapter>>> {
    Ok(vec![
        NhsEngland::new(client.clone())?.into_adapter(),
        HealthJobsUk::new(client.clone())?.into_adapter(),
        NhsScotland::new(client.clone())?.into_adapter(),
        NhsJobs::new(client.clone())?.into_adapter(),
    ])
}

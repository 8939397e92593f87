use scraper::{ElementRef, Selector};
use url::Url;

/// Field lookups shared by every job board's card layout.
pub struct CardExtractor;

impl CardExtractor {
    /// Trimmed text of an element, `None` when it has no visible text.
    pub fn text(element: ElementRef<'_>) -> Option<String> {
        let text = element
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Text of the first descendant matching `selector`.
    pub fn select_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
        card.select(selector).next().and_then(Self::text)
    }

    /// Trimmed, non-empty `href` of an element.
    pub fn href(element: ElementRef<'_>) -> Option<String> {
        element
            .value()
            .attr("href")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Resolve a card link against the board's base URL. Absolute links are
    /// kept as-is.
    pub fn resolve_link(base: &Url, href: &str) -> Option<String> {
        if href.starts_with("http://") || href.starts_with("https://") {
            return Some(href.to_string());
        }
        base.join(href).ok().map(|u| u.to_string())
    }
}

//! Google News results page extractor

use super::traits::Extractor;
use crate::results::SearchItem;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

// One result container; the class attribute must be exactly "dbsr".
static RESULT_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("div[class=dbsr]"));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("a"));
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("div[role=heading]"));
static DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("div.Y3v8qd"));
static AUTHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("div.XTjFC.WF4CUc"));
static AGE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector("span.WG9SHc"));

/// Google News (`tbm=nws`) results page extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleNews;

impl GoogleNews {
    pub fn new() -> Self {
        Self
    }

    fn parse_item(element: ElementRef<'_>) -> SearchItem {
        let link = element
            .select(&LINK_SELECTOR)
            .find_map(|a| a.value().attr("href"))
            .unwrap_or_default();

        SearchItem::new(
            link,
            select_text(element, &TITLE_SELECTOR),
            select_text(element, &DESCRIPTION_SELECTOR),
            select_text(element, &AUTHOR_SELECTOR),
            select_text(element, &AGE_SELECTOR),
        )
    }
}

impl Extractor for GoogleNews {
    fn name(&self) -> &str {
        "google_news"
    }

    fn extract(&self, html: &str) -> Vec<SearchItem> {
        let document = Html::parse_document(html);

        document
            .select(&RESULT_SELECTOR)
            .map(Self::parse_item)
            .collect()
    }
}

/// Whitespace-normalized text of every match, joined by a single space.
/// Empty when nothing matches.
fn select_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .map(normalized_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(link: &str, title: &str, desc: &str, author: Option<&str>, age: &str) -> String {
        let author = author
            .map(|a| format!(r#"<div class="XTjFC WF4CUc">{a}</div>"#))
            .unwrap_or_default();
        format!(
            r#"<div class="dbsr"><a href="{link}">
                 <div role="heading">{title}</div>
                 <div class="Y3v8qd">{desc}</div>
                 {author}
                 <span class="WG9SHc">{age}</span>
               </a></div>"#
        )
    }

    #[test]
    fn test_extracts_all_fields_in_order() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            container("https://a.example/1", "First", "One", Some("Alpha"), "1 hour ago"),
            container("https://b.example/2", "Second", "Two", Some("Beta"), "2 hours ago"),
            container("https://c.example/3", "Third", "Three", Some("Gamma"), "3 days ago"),
        );

        let items = GoogleNews::new().extract(&html);

        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0],
            SearchItem::new("https://a.example/1", "First", "One", "Alpha", "1 hour ago")
        );
        assert_eq!(items[1].title(), "Second");
        assert_eq!(items[2].link(), "https://c.example/3");
        assert_eq!(items[2].age(), "3 days ago");
    }

    #[test]
    fn test_missing_byline_yields_empty_author() {
        let html = container("https://a.example/1", "Title", "Desc", None, "5 mins ago");

        let items = GoogleNews::new().extract(&html);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].author(), "");
        assert_eq!(items[0].link(), "https://a.example/1");
        assert_eq!(items[0].title(), "Title");
        assert_eq!(items[0].description(), "Desc");
        assert_eq!(items[0].age(), "5 mins ago");
    }

    #[test]
    fn test_empty_container_yields_empty_item() {
        let items = GoogleNews::new().extract(r#"<div class="dbsr"></div>"#);
        assert_eq!(items, vec![SearchItem::default()]);
    }

    #[test]
    fn test_class_must_match_exactly() {
        let html = r#"<div class="dbsr extra"><div role="heading">Nope</div></div>"#;
        assert!(GoogleNews::new().extract(html).is_empty());
    }

    #[test]
    fn test_no_containers() {
        assert!(GoogleNews::new().extract("<html><body><p>CAPTCHA</p></body></html>").is_empty());
        assert!(GoogleNews::new().extract("").is_empty());
    }

    #[test]
    fn test_text_is_whitespace_normalized() {
        let html = r#"<div class="dbsr"><div role="heading">
            Breaking   <b>news</b>
            today</div></div>"#;

        let items = GoogleNews::new().extract(html);
        assert_eq!(items[0].title(), "Breaking news today");
    }

    #[test]
    fn test_link_from_first_anchor_with_href() {
        let html = r#"<div class="dbsr"><a name="top"></a><a href="https://x.example">x</a></div>"#;
        assert_eq!(GoogleNews::new().extract(html)[0].link(), "https://x.example");
    }
}

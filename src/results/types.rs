//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single news result extracted from one result container
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchItem {
    link: String,
    title: String,
    description: String,
    author: String,
    age: String,
}

impl SearchItem {
    /// Create a new item
    pub fn new(
        link: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            link: link.into(),
            title: title.into(),
            description: description.into(),
            author: author.into(),
            age: age.into(),
        }
    }

    /// Target URL of the article
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Snippet shown under the title
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Publisher byline, empty when the page shows none
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Relative publication time as displayed, e.g. "2 hours ago"
    pub fn age(&self) -> &str {
        &self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let item = SearchItem::new(
            "https://example.com/a",
            "Title",
            "Snippet",
            "Example News",
            "3 hours ago",
        );

        assert_eq!(item.link(), "https://example.com/a");
        assert_eq!(item.title(), "Title");
        assert_eq!(item.description(), "Snippet");
        assert_eq!(item.author(), "Example News");
        assert_eq!(item.age(), "3 hours ago");
    }

    #[test]
    fn test_value_equality() {
        let a = SearchItem::new("l", "t", "d", "", "");
        let b = SearchItem::new("l", "t", "d", "", "");
        assert_eq!(a, b);
        assert_ne!(a, SearchItem::new("l", "t", "d", "x", ""));
    }

    #[test]
    fn test_serializes_all_fields() {
        let item = SearchItem::new("l", "t", "d", "a", "1 day ago");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["link"], "l");
        assert_eq!(json["author"], "a");
        assert_eq!(json["age"], "1 day ago");
    }
}

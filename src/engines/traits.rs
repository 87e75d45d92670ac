//! Extractor trait and response types

use crate::results::SearchItem;
use std::collections::HashMap;

/// HTTP response handed to an extractor
#[derive(Debug, Clone)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turns a results page into search items.
///
/// Implementations must not fail: a container whose sub-elements are missing
/// still yields an item with empty fields, and a page without containers
/// yields an empty list.
pub trait Extractor: Send + Sync {
    /// Extractor name, used in log records
    fn name(&self) -> &str;

    /// Extract every result container in document order
    fn extract(&self, html: &str) -> Vec<SearchItem>;
}

//! Search query and URL construction

use crate::error::{Error, Result};

/// Query marker selecting news-mode results
const NEWS_PARAM: &str = "&tbm=nws";

/// Marker preceding the interface language code
const LANGUAGE_PARAM: &str = "&hl=";

/// Terms and language of a single news search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    language: String,
    search_terms: Vec<String>,
}

impl SearchQuery {
    /// Create a query. Fails with [`Error::InvalidArgument`] when `terms` is
    /// empty. Terms are kept verbatim, including empty ones.
    pub fn new<I, S>(language: impl Into<String>, terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let search_terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        if search_terms.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one search term is required".to_string(),
            ));
        }

        Ok(Self {
            language: language.into(),
            search_terms,
        })
    }

    /// Language code, empty when unspecified
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    /// Build the request URL for `endpoint`.
    ///
    /// Terms are joined with a literal `+` and are not escaped; callers are
    /// expected to pass URL-safe tokens.
    pub fn mount_url(&self, endpoint: &str) -> String {
        let mut url = format!("{}?q={}{}", endpoint, self.search_terms.join("+"), NEWS_PARAM);
        if !self.language.is_empty() {
            url.push_str(LANGUAGE_PARAM);
            url.push_str(&self.language);
        }
        url
    }
}

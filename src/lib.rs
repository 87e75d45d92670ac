//! GNews-RS: an asynchronous Google News results scraper
//!
//! A [`SearchTask`] builds a news-mode search URL from a set of terms, fetches
//! the page on a background tokio task, extracts one [`SearchItem`] per result
//! container and then fires the caller's completion handler exactly once.

pub mod config;
pub mod engines;
pub mod error;
pub mod logging;
pub mod network;
pub mod results;
pub mod search;

pub use config::Settings;
pub use engines::{Extractor, GoogleNews};
pub use error::{Error, Result};
pub use results::SearchItem;
pub use search::{SearchQuery, SearchTask, TaskStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Search endpoint used when no settings override it
pub const DEFAULT_ENDPOINT: &str = "https://www.google.com/search";

//! Results page extractors
//!
//! Defines the [`Extractor`] trait and the Google News implementation.

mod google_news;
mod traits;

pub use google_news::GoogleNews;
pub use traits::*;

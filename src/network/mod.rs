//! HTTP networking module
//!
//! Provides the HTTP client used to fetch results pages.

mod client;

pub use client::HttpClient;

//! Result types
//!
//! Records extracted from a news results page.

mod types;

pub use types::*;

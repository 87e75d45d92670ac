//! News search module
//!
//! Builds the request URL for a query and runs the fetch-extract-notify
//! cycle on a background task.

mod query;
mod task;

pub use query::SearchQuery;
pub use task::{SearchTask, SearchTaskBuilder, TaskStatus};

//! Background search task

use super::query::SearchQuery;
use crate::config::Settings;
use crate::engines::{Extractor, GoogleNews};
use crate::error::{Error, Result};
use crate::network::HttpClient;
use crate::results::SearchItem;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

type CompletionHandler = Box<dyn FnOnce() + Send + 'static>;

/// Outcome of a search task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskStatus {
    /// Still fetching
    #[default]
    Pending,
    /// Page fetched and parsed; results may still be empty
    Completed,
    /// Fetch failed; results are empty
    Failed(String),
}

#[derive(Debug, Default)]
struct TaskState {
    results: Vec<SearchItem>,
    status: TaskStatus,
}

/// One news search running on its own tokio task.
///
/// The task starts as soon as it is constructed. When it finishes, the
/// results are published and then the completion handler runs, exactly once,
/// whether the fetch succeeded or not. Read [`SearchTask::results`] only after
/// the handler has fired.
pub struct SearchTask {
    query: SearchQuery,
    url: String,
    state: Arc<RwLock<TaskState>>,
    handle: JoinHandle<()>,
}

impl SearchTask {
    /// Start a search with an explicit language code (empty = unspecified)
    pub fn spawn<F, I, S>(language: impl Into<String>, on_complete: F, terms: I) -> Result<Self>
    where
        F: FnOnce() + Send + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().spawn(language, on_complete, terms)
    }

    /// Start a search without a language code
    pub fn spawn_default<F, I, S>(on_complete: F, terms: I) -> Result<Self>
    where
        F: FnOnce() + Send + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().spawn_default(on_complete, terms)
    }

    /// Builder for tasks with custom settings, client or extractor
    pub fn builder() -> SearchTaskBuilder {
        SearchTaskBuilder::new()
    }

    pub fn language(&self) -> &str {
        self.query.language()
    }

    pub fn search_terms(&self) -> &[String] {
        self.query.search_terms()
    }

    /// The URL this task fetches
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Snapshot of the results. Empty until the task has finished.
    pub fn results(&self) -> Vec<SearchItem> {
        self.read_state(|state| state.results.clone())
    }

    pub fn status(&self) -> TaskStatus {
        self.read_state(|state| state.status.clone())
    }

    /// Whether the background body, including the handler, has returned
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to finish and return its results
    pub async fn join(self) -> Vec<SearchItem> {
        if let Err(e) = self.handle.await {
            error!(url = %self.url, error = %e, "Search task did not finish cleanly");
        }
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.results.clone()
    }

    fn read_state<T>(&self, f: impl FnOnce(&TaskState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}

/// Configures and spawns [`SearchTask`]s
pub struct SearchTaskBuilder {
    settings: Settings,
    client: Option<Arc<HttpClient>>,
    extractor: Arc<dyn Extractor>,
}

impl Default for SearchTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTaskBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            client: None,
            extractor: Arc::new(GoogleNews::new()),
        }
    }

    /// Use these settings for the endpoint, default language and client
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Reuse an existing client instead of building one from the settings
    pub fn client(mut self, client: HttpClient) -> Self {
        self.client = Some(Arc::new(client));
        self
    }

    pub fn extractor(mut self, extractor: impl Extractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Start a search using the configured default language
    pub fn spawn_default<F, I, S>(self, on_complete: F, terms: I) -> Result<SearchTask>
    where
        F: FnOnce() + Send + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let language = self.settings.scraper.default_language.clone();
        self.spawn(language, on_complete, terms)
    }

    /// Validate the terms and start the search.
    ///
    /// Fails without touching the network if `terms` is empty, and with
    /// [`Error::NoRuntime`] outside a tokio runtime.
    pub fn spawn<F, I, S>(self, language: impl Into<String>, on_complete: F, terms: I) -> Result<SearchTask>
    where
        F: FnOnce() + Send + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let query = SearchQuery::new(language, terms)?;
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;

        let client = match self.client {
            Some(client) => client,
            None => Arc::new(HttpClient::with_settings(&self.settings.outgoing)?),
        };

        let url = query.mount_url(&self.settings.scraper.endpoint);
        let state = Arc::new(RwLock::new(TaskState::default()));

        debug!(%url, terms = query.search_terms().len(), "Spawning search task");

        let handle = runtime.spawn(run(
            url.clone(),
            client,
            self.extractor,
            state.clone(),
            Box::new(on_complete),
        ));

        Ok(SearchTask {
            query,
            url,
            state,
            handle,
        })
    }
}

/// Task body: fetch, extract, publish, then notify.
#[instrument(level = "debug", skip_all, fields(url = %url, extractor = extractor.name()))]
async fn run(
    url: String,
    client: Arc<HttpClient>,
    extractor: Arc<dyn Extractor>,
    state: Arc<RwLock<TaskState>>,
    on_complete: CompletionHandler,
) {
    let outcome = fetch(&client, &url)
        .await
        .map(|html| extractor.extract(&html));

    {
        let mut state = state.write().unwrap_or_else(PoisonError::into_inner);
        match outcome {
            Ok(items) => {
                info!(count = items.len(), "Extracted news results");
                state.results = items;
                state.status = TaskStatus::Completed;
            }
            Err(e) => {
                warn!(error = %e, "News search failed");
                state.status = TaskStatus::Failed(e.to_string());
            }
        }
    }

    on_complete();
}

async fn fetch(client: &HttpClient, url: &str) -> Result<String> {
    let response = client.get(url).await?;
    if !response.is_success() {
        return Err(Error::HttpStatus(response.status));
    }
    Ok(response.text)
}

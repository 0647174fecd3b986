use crate::config::SearchConfig;
use crate::model::{Recipe, Resource};
use crate::repository::SearchRepository;
use crate::viewmodel::TransientError;
use futures::StreamExt;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Observable state of the search screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchUiState {
    /// Query as typed by the user
    pub query: String,
    pub is_loading: bool,
    pub results: Vec<Recipe>,
    /// Message to show once, then cleared
    pub error: Option<String>,
    /// The typed query has not produced a result yet
    pub pending: bool,
}

impl SearchUiState {
    fn apply(&mut self, resource: Resource<Vec<Recipe>>) {
        match resource {
            Resource::Loading => {
                self.is_loading = true;
                self.error = None;
            }
            Resource::Success(recipes) => {
                self.results = recipes;
                self.is_loading = false;
                self.error = None;
            }
            Resource::Error(message) => {
                self.error = Some(message);
                self.is_loading = false;
                self.results.clear();
            }
        }
    }

    /// Mark `query` as resolved unless the user has typed something newer
    fn settle(&mut self, query: &str) {
        if self.query.trim() == query {
            self.pending = false;
        }
    }
}

/// View-model behind the search screen.
///
/// Query changes are debounced before hitting the repository, and a newer
/// query drops whatever search is still in flight, so only the latest query's
/// results ever reach the state. Blank queries clear the results right away
/// without a repository call.
///
/// Must be created inside a tokio runtime. The pipeline task is aborted when
/// the view-model is dropped.
pub struct SearchViewModel {
    query: watch::Sender<String>,
    state: Arc<watch::Sender<SearchUiState>>,
    task: JoinHandle<()>,
}

impl SearchViewModel {
    pub fn new(repository: Arc<dyn SearchRepository>, config: &SearchConfig) -> Self {
        let (query, query_rx) = watch::channel(String::new());
        let (state, _) = watch::channel(SearchUiState::default());
        let state = Arc::new(state);

        let task = tokio::spawn(run_pipeline(
            repository,
            query_rx,
            Arc::clone(&state),
            config.debounce(),
        ));

        SearchViewModel { query, state, task }
    }

    /// Publish a new query typed by the user
    pub fn on_search_text_change(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_if_modified(|s| {
            if s.query == text {
                return false;
            }
            s.query = text.clone();
            s.pending = true;
            true
        });
        self.query.send_if_modified(|q| {
            if *q == text {
                return false;
            }
            *q = text;
            true
        });
    }

    /// Reset the query to empty, which also clears the results
    pub fn clear_query(&self) {
        self.on_search_text_change(String::new());
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SearchUiState {
        self.state.borrow().clone()
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<SearchUiState> {
        self.state.subscribe()
    }

    /// Wait until the latest query has produced its results or error
    pub async fn settled(&self) -> SearchUiState {
        let mut updates = self.state.subscribe();
        let state = match updates.wait_for(|s| !s.pending && !s.is_loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }
}

impl TransientError for SearchViewModel {
    fn take_error(&self) -> Option<String> {
        let mut taken = None;
        self.state.send_if_modified(|s| {
            taken = s.error.take();
            taken.is_some()
        });
        taken
    }
}

impl Drop for SearchViewModel {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_pipeline(
    repository: Arc<dyn SearchRepository>,
    mut queries: watch::Receiver<String>,
    state: Arc<watch::Sender<SearchUiState>>,
    debounce: Duration,
) {
    // The initial query is handled like any later one
    let mut unhandled = true;

    loop {
        if !unhandled && queries.changed().await.is_err() {
            return;
        }
        unhandled = false;

        let query = queries.borrow_and_update().trim().to_string();

        if query.is_empty() {
            state.send_modify(|s| {
                s.apply(Resource::Success(Vec::new()));
                s.settle(&query);
            });
            continue;
        }

        tokio::select! {
            changed = queries.changed() => {
                if changed.is_err() {
                    return;
                }
                unhandled = true;
                continue;
            }
            _ = sleep(debounce) => {}
        }

        info!("Searching recipes for '{}'", query);
        let mut results = repository.search_recipe(&query);

        loop {
            tokio::select! {
                changed = queries.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    debug!("Dropping in-flight search for '{}'", query);
                    unhandled = true;
                    break;
                }
                next = results.next() => match next {
                    Some(resource) => state.send_modify(|s| {
                        let terminal = !resource.is_loading();
                        s.apply(resource);
                        if terminal {
                            s.settle(&query);
                        }
                    }),
                    None => {
                        state.send_modify(|s| {
                            if s.is_loading {
                                s.apply(Resource::Error(format!(
                                    "No result received for '{}'",
                                    query
                                )));
                            }
                            s.settle(&query);
                        });
                        break;
                    }
                },
            }
        }
    }
}

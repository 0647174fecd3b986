use crate::model::{Recipe, Resource};
use crate::repository::DetailsRepository;
use crate::viewmodel::TransientError;
use futures::{FutureExt, StreamExt};
use log::{info, warn};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observable state of the details screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsUiState {
    pub recipe_id: String,
    pub recipe: Option<Recipe>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl DetailsUiState {
    fn apply(&mut self, resource: Resource<Recipe>) {
        match resource {
            Resource::Loading => self.is_loading = true,
            Resource::Success(recipe) => {
                self.recipe = Some(recipe);
                self.is_loading = false;
            }
            Resource::Error(message) => {
                self.error = Some(message);
                self.is_loading = false;
            }
        }
    }

    /// Turn a fetch that never reached a terminal state into an error
    fn fail_if_loading(&mut self, message: String) -> bool {
        if !self.is_loading {
            return false;
        }
        self.apply(Resource::Error(message));
        true
    }
}

/// View-model behind the details screen: one fetch, started on creation.
pub struct DetailsViewModel {
    state: Arc<watch::Sender<DetailsUiState>>,
    task: JoinHandle<()>,
}

impl DetailsViewModel {
    pub fn new(repository: Arc<dyn DetailsRepository>, recipe_id: impl Into<String>) -> Self {
        let recipe_id = recipe_id.into();
        let (state, _) = watch::channel(DetailsUiState {
            recipe_id: recipe_id.clone(),
            is_loading: true,
            ..Default::default()
        });
        let state = Arc::new(state);

        let task_state = Arc::clone(&state);
        let task = tokio::spawn(async move {
            info!("Loading recipe {}", recipe_id);
            let fetch = async {
                let mut updates = repository.get_recipe(&recipe_id);
                while let Some(resource) = updates.next().await {
                    task_state.send_modify(|s| s.apply(resource));
                }
            };

            let message = match AssertUnwindSafe(fetch).catch_unwind().await {
                Ok(()) => format!("No result received for recipe {}", recipe_id),
                Err(_) => format!("Loading recipe {} failed unexpectedly", recipe_id),
            };
            if task_state.send_if_modified(|s| s.fail_if_loading(message)) {
                warn!("Fetch for recipe {} ended without a result", recipe_id);
            }
        });

        DetailsViewModel { state, task }
    }

    pub fn state(&self) -> DetailsUiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailsUiState> {
        self.state.subscribe()
    }

    /// Wait until the fetch has succeeded or failed
    pub async fn finished(&self) -> DetailsUiState {
        let mut updates = self.state.subscribe();
        let state = match updates.wait_for(|s| !s.is_loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }
}

impl TransientError for DetailsViewModel {
    fn take_error(&self) -> Option<String> {
        let mut taken = None;
        self.state.send_if_modified(|s| {
            taken = s.error.take();
            taken.is_some()
        });
        taken
    }
}

impl Drop for DetailsViewModel {
    fn drop(&mut self) {
        self.task.abort();
    }
}

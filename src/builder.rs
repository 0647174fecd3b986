use std::sync::Arc;
use std::time::Duration;

use crate::config::{duration_to_millis, AppConfig};
use crate::model::Recipe;
use crate::repository::{ForkifySource, RecipeRepository, RecipeSource};
use crate::viewmodel::{DetailsViewModel, SearchViewModel};
use crate::RecipeError;

/// Builder for configuring a [`RecipeBrowser`]
#[derive(Default)]
pub struct RecipeBrowserBuilder {
    config: Option<AppConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    debounce: Option<Duration>,
    source: Option<Arc<dyn RecipeSource>>,
}

impl RecipeBrowserBuilder {
    /// Start from an already loaded configuration instead of the defaults
    ///
    /// # Example
    /// ```
    /// use recipe_browser::{AppConfig, RecipeBrowser};
    ///
    /// let builder = RecipeBrowser::builder().config(AppConfig::default());
    /// ```
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Point the HTTP source at another API host
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder().base_url("http://localhost:8080");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the quiet period applied to search queries
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeBrowser::builder().debounce(Duration::from_millis(500));
    /// ```
    pub fn debounce(mut self, duration: Duration) -> Self {
        self.debounce = Some(duration);
        self
    }

    /// Use a custom recipe source instead of the HTTP API
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the browser
    ///
    /// # Errors
    /// Returns `RecipeError` if the HTTP client cannot be created.
    pub fn build(self) -> Result<RecipeBrowser, RecipeError> {
        let mut config = self.config.unwrap_or_default();

        if let Some(url) = self.base_url {
            config.api.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_ms = duration_to_millis(timeout);
        }
        if let Some(debounce) = self.debounce {
            config.search.debounce_ms = duration_to_millis(debounce);
        }

        let source = match self.source {
            Some(source) => source,
            None => Arc::new(ForkifySource::new(&config.api)?),
        };

        Ok(RecipeBrowser {
            repository: Arc::new(RecipeRepository::from_source(source)),
            config,
        })
    }
}

/// Entry point tying configuration, repository and view-models together
pub struct RecipeBrowser {
    repository: Arc<RecipeRepository>,
    config: AppConfig,
}

impl RecipeBrowser {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let browser = RecipeBrowser::builder().build().unwrap();
    /// ```
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Create the search view-model; must be called inside a tokio runtime
    pub fn search_view_model(&self) -> SearchViewModel {
        SearchViewModel::new(self.repository.clone(), &self.config.search)
    }

    /// Create the details view-model and start fetching `recipe_id`
    pub fn details_view_model(&self, recipe_id: impl Into<String>) -> DetailsViewModel {
        DetailsViewModel::new(self.repository.clone(), recipe_id)
    }

    /// One-shot search without debounce
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.source().search(query).await
    }

    /// One-shot detail fetch
    pub async fn get(&self, recipe_id: &str) -> Result<Recipe, RecipeError> {
        self.repository.source().get(recipe_id).await
    }
}

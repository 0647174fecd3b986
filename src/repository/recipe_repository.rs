use crate::error::RecipeError;
use crate::model::{Recipe, Resource};
use crate::repository::{DetailsRepository, RecipeSource, ResourceStream, SearchRepository};
use futures::future;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use std::future::Future;
use std::sync::Arc;

/// Adapts a [`RecipeSource`] into the stream-based repositories.
///
/// Every call emits `Loading` followed by exactly one `Success` or `Error`.
#[derive(Clone)]
pub struct RecipeRepository {
    source: Arc<dyn RecipeSource>,
}

impl RecipeRepository {
    pub fn new(source: impl RecipeSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_source(source: Arc<dyn RecipeSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    /// The underlying source, for one-shot calls outside the stream contract
    pub fn source(&self) -> &dyn RecipeSource {
        self.source.as_ref()
    }
}

fn track<T, F>(operation: &'static str, call: F) -> ResourceStream<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, RecipeError>> + Send + 'static,
{
    let outcome = async move {
        match call.await {
            Ok(data) => Resource::Success(data),
            Err(e) => {
                warn!("{} failed: {}", operation, e);
                Resource::Error(e.to_string())
            }
        }
    };

    stream::once(future::ready(Resource::Loading))
        .chain(stream::once(outcome))
        .boxed()
}

impl SearchRepository for RecipeRepository {
    fn search_recipe(&self, query: &str) -> ResourceStream<Vec<Recipe>> {
        debug!("Searching '{}' via {}", query, self.source.source_name());
        let source = Arc::clone(&self.source);
        let query = query.to_string();
        track("search", async move { source.search(&query).await })
    }
}

impl DetailsRepository for RecipeRepository {
    fn get_recipe(&self, recipe_id: &str) -> ResourceStream<Recipe> {
        debug!(
            "Fetching recipe {} via {}",
            recipe_id,
            self.source.source_name()
        );
        let source = Arc::clone(&self.source);
        let recipe_id = recipe_id.to_string();
        track("get", async move { source.get(&recipe_id).await })
    }
}

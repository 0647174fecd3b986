mod forkify;
mod recipe_repository;

pub use forkify::ForkifySource;
pub use recipe_repository::RecipeRepository;

use crate::error::RecipeError;
use crate::model::{Recipe, Resource};
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Stream of tri-state outcomes for one repository call
pub type ResourceStream<T> = BoxStream<'static, Resource<T>>;

/// Repository consumed by the search view-model
pub trait SearchRepository: Send + Sync {
    /// Search recipes matching `query`
    fn search_recipe(&self, query: &str) -> ResourceStream<Vec<Recipe>>;
}

/// Repository consumed by the details view-model
pub trait DetailsRepository: Send + Sync {
    /// Fetch a single recipe with its ingredients
    fn get_recipe(&self, recipe_id: &str) -> ResourceStream<Recipe>;
}

/// Raw backend for recipe data
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "forkify")
    fn source_name(&self) -> &str;

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError>;

    async fn get(&self, recipe_id: &str) -> Result<Recipe, RecipeError>;
}

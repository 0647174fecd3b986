pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod screen;
pub mod uniffi_bindings;
pub mod viewmodel;

pub use builder::{RecipeBrowser, RecipeBrowserBuilder};
pub use config::{AppConfig, ApiConfig, SearchConfig};
pub use error::RecipeError;
pub use model::{Recipe, Resource};
pub use repository::{
    DetailsRepository, ForkifySource, RecipeRepository, RecipeSource, ResourceStream,
    SearchRepository,
};
pub use screen::{DetailsScreen, SearchScreen};
pub use viewmodel::{
    DetailsUiState, DetailsViewModel, SearchUiState, SearchViewModel, TransientError,
};

/// Search recipes once using configuration from `recipes.toml` and the environment
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, RecipeError> {
    let config = AppConfig::load()?;
    RecipeBrowser::builder()
        .config(config)
        .build()?
        .search(query)
        .await
}

/// Fetch one recipe using configuration from `recipes.toml` and the environment
pub async fn get_recipe(recipe_id: &str) -> Result<Recipe, RecipeError> {
    let config = AppConfig::load()?;
    RecipeBrowser::builder()
        .config(config)
        .build()?
        .get(recipe_id)
        .await
}

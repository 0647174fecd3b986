//! UniFFI bindings for recipe-browser
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.
//! Debouncing is left to the host UI; these calls hit the API directly.

use std::fmt;
use std::time::Duration;

use crate::{Recipe, RecipeBrowser, RecipeError};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub recipe_id: String,
    pub title: String,
    pub image_url: String,
    pub publisher: String,
    pub social_rank: f64,
    /// Empty for search results
    pub ingredients: Vec<String>,
    /// Original recipe page (empty string if unknown)
    pub source_url: String,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            recipe_id: recipe.recipe_id,
            title: recipe.title,
            image_url: recipe.image_url,
            publisher: recipe.publisher,
            social_rank: recipe.social_rank,
            ingredients: recipe.ingredients,
            source_url: recipe.source_url.unwrap_or_default(),
        }
    }
}

/// Client settings passed from the host app
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiClientConfig {
    /// Optional API base URL (uses default if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeError {
    /// Network or API failure
    FetchError { message: String },
    /// No recipe for the identifier
    NotFound { message: String },
    /// Unexpected response body
    ParseError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiRecipeError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiRecipeError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiRecipeError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiRecipeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiRecipeError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeError {}

impl From<RecipeError> for FfiRecipeError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::Fetch(e) => FfiRecipeError::FetchError {
                message: e.to_string(),
            },
            RecipeError::Api(message) => FfiRecipeError::FetchError { message },
            RecipeError::NotFound(message) => FfiRecipeError::NotFound { message },
            RecipeError::Parse(message) => FfiRecipeError::ParseError { message },
            RecipeError::InvalidInput(message) => FfiRecipeError::InvalidInput { message },
            RecipeError::Config(e) => FfiRecipeError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiRecipeError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiRecipeError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn build_browser(config: Option<FfiClientConfig>) -> Result<RecipeBrowser, FfiRecipeError> {
    let config = config.unwrap_or_default();
    let mut builder = RecipeBrowser::builder();

    if let Some(url) = config.base_url {
        builder = builder.base_url(url);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    Ok(builder.build()?)
}

/// Search recipes matching a query
///
/// A blank query returns an empty list without contacting the API.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    query: String,
    config: Option<FfiClientConfig>,
) -> Result<Vec<FfiRecipe>, FfiRecipeError> {
    let browser = build_browser(config)?;
    let rt = create_runtime()?;
    rt.block_on(async {
        let recipes = browser.search(&query).await?;
        Ok(recipes.into_iter().map(FfiRecipe::from).collect())
    })
}

/// Fetch one recipe with its ingredients
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe(
    recipe_id: String,
    config: Option<FfiClientConfig>,
) -> Result<FfiRecipe, FfiRecipeError> {
    let browser = build_browser(config)?;
    let rt = create_runtime()?;
    rt.block_on(async {
        let recipe = browser.get(&recipe_id).await?;
        Ok(recipe.into())
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

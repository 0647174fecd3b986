use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch recipes: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered with an error
    #[error("Recipe API error: {0}")]
    Api(String),

    /// No recipe exists for the requested identifier
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Response body could not be understood
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invalid input provided by the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        RecipeError::Parse(err.to_string())
    }
}

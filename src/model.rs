use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A recipe as served by the remote recipe API.
///
/// Search hits carry no ingredients; the list is only filled in by a detail
/// fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier used to fetch details
    pub recipe_id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub social_rank: f64,
    /// Ordered ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub publisher_url: Option<String>,
}

/// Outcome of one asynchronous operation: in flight, succeeded or failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// Transform the payload of a `Success`, leaving other states untouched
    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(message) => Resource::Error(message),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Resource<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Resource::Success(data),
            Err(e) => Resource::Error(e.to_string()),
        }
    }
}

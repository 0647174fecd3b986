use crate::config::ApiConfig;
use crate::error::RecipeError;
use crate::model::Recipe;
use crate::repository::RecipeSource;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    count: usize,
    #[serde(default)]
    recipes: Vec<Recipe>,
}

#[derive(Deserialize)]
struct GetResponse {
    recipe: Option<Recipe>,
}

/// Recipe source backed by the Forkify HTTP API
pub struct ForkifySource {
    client: Client,
    base_url: String,
}

impl ForkifySource {
    /// Create a new source from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, RecipeError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(ForkifySource {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ForkifySource {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn read_body(response: Response) -> Result<Value, RecipeError> {
        let status = response.status();
        let text = response.text().await?;
        let body: Option<Value> = serde_json::from_str(&text).ok();

        // The API reports failures as {"error": "..."}, sometimes with a 200
        if let Some(message) = body
            .as_ref()
            .and_then(|b| b.get("error"))
            .and_then(Value::as_str)
        {
            return Err(RecipeError::Api(message.to_string()));
        }

        if !status.is_success() {
            return Err(RecipeError::Api(format!(
                "request failed with status {}",
                status
            )));
        }

        body.ok_or_else(|| RecipeError::Parse("response is not valid JSON".to_string()))
    }
}

#[async_trait]
impl RecipeSource for ForkifySource {
    fn source_name(&self) -> &str {
        "forkify"
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, RecipeError> {
        let response = self
            .client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        let parsed: SearchResponse = serde_json::from_value(body)?;
        debug!("Search '{}' returned {} recipes", query, parsed.count);
        Ok(parsed.recipes)
    }

    async fn get(&self, recipe_id: &str) -> Result<Recipe, RecipeError> {
        if recipe_id.trim().is_empty() {
            return Err(RecipeError::InvalidInput(
                "Recipe id cannot be empty".to_string(),
            ));
        }

        let response = self
            .client
            .get(format!("{}/api/get", self.base_url))
            .query(&[("rId", recipe_id)])
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        let parsed: GetResponse = serde_json::from_value(body)?;
        parsed
            .recipe
            .ok_or_else(|| RecipeError::NotFound(recipe_id.to_string()))
    }
}

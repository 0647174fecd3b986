#![allow(dead_code)]

use futures::stream::{self, StreamExt};
use recipe_browser::{
    DetailsRepository, Recipe, Resource, ResourceStream, SearchRepository,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn recipe(title: &str) -> Recipe {
    Recipe {
        recipe_id: format!("id-{}", title),
        title: title.to_string(),
        publisher: "Test Kitchen".to_string(),
        ..Default::default()
    }
}

/// Repository whose answers and latencies are scripted per query.
///
/// Every call is recorded at the moment it is issued.
#[derive(Clone, Default)]
pub struct ScriptedRepository {
    calls: Arc<Mutex<Vec<String>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    failures: Arc<Mutex<HashMap<String, String>>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(self, query: &str, delay: Duration) -> Self {
        self.delays
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
        self
    }

    pub fn fail(self, query: &str, message: &str) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(query.to_string(), message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, key: &str) -> (Duration, Option<String>) {
        self.calls.lock().unwrap().push(key.to_string());
        let delay = self
            .delays
            .lock()
            .unwrap()
            .get(key)
            .copied()
            .unwrap_or(Duration::from_millis(10));
        let failure = self.failures.lock().unwrap().get(key).cloned();
        (delay, failure)
    }
}

impl SearchRepository for ScriptedRepository {
    fn search_recipe(&self, query: &str) -> ResourceStream<Vec<Recipe>> {
        let (delay, failure) = self.answer(query);
        let query = query.to_string();
        let outcome = async move {
            tokio::time::sleep(delay).await;
            match failure {
                Some(message) => Resource::Error(message),
                None => Resource::Success(vec![recipe(&query)]),
            }
        };

        stream::once(async { Resource::Loading })
            .chain(stream::once(outcome))
            .boxed()
    }
}

impl DetailsRepository for ScriptedRepository {
    fn get_recipe(&self, recipe_id: &str) -> ResourceStream<Recipe> {
        let (delay, failure) = self.answer(recipe_id);
        let recipe_id = recipe_id.to_string();
        let outcome = async move {
            tokio::time::sleep(delay).await;
            match failure {
                Some(message) => Resource::Error(message),
                None => Resource::Success(Recipe {
                    recipe_id,
                    title: "Shakshuka".to_string(),
                    ingredients: vec!["6 eggs".to_string(), "1 can tomatoes".to_string()],
                    ..Default::default()
                }),
            }
        };

        stream::once(async { Resource::Loading })
            .chain(stream::once(outcome))
            .boxed()
    }
}

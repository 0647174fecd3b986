mod common;

use common::ScriptedRepository;
use futures::stream::{self, StreamExt};
use recipe_browser::screen::show_error;
use recipe_browser::{
    DetailsRepository, DetailsScreen, DetailsViewModel, Recipe, Resource, ResourceStream,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Repository whose stream stops after `Loading`
struct LoadingOnlyRepository;

impl DetailsRepository for LoadingOnlyRepository {
    fn get_recipe(&self, _recipe_id: &str) -> ResourceStream<Recipe> {
        stream::once(async { Resource::Loading }).boxed()
    }
}

#[tokio::test(start_paused = true)]
async fn test_details_loading_then_success() {
    let repository = ScriptedRepository::new().delay("42", Duration::from_millis(500));
    let vm = DetailsViewModel::new(Arc::new(repository.clone()), "42");

    let initial = vm.state();
    assert!(initial.is_loading);
    assert_eq!(initial.recipe_id, "42");

    let state = vm.finished().await;

    assert!(!state.is_loading);
    assert!(state.error.is_none());
    let recipe = state.recipe.clone().unwrap();
    assert_eq!(recipe.recipe_id, "42");
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(repository.calls(), vec!["42"]);

    let screen = DetailsScreen::render(&state);
    assert!(screen.contains("Shakshuka"));
    assert!(screen.contains("  6 eggs"));
}

#[tokio::test(start_paused = true)]
async fn test_details_error_shown_once() {
    let repository = ScriptedRepository::new().fail("404", "Recipe not found: 404");
    let vm = DetailsViewModel::new(Arc::new(repository), "404");

    let state = vm.finished().await;

    assert!(state.recipe.is_none());
    assert_eq!(state.error.as_deref(), Some("Recipe not found: 404"));

    assert_eq!(show_error(&vm).as_deref(), Some("Recipe not found: 404"));
    assert_eq!(show_error(&vm), None);
    assert!(vm.state().error.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_stream_without_result_becomes_error() {
    let vm = DetailsViewModel::new(Arc::new(LoadingOnlyRepository), "7");

    let state = vm.finished().await;

    assert!(!state.is_loading);
    assert!(state.recipe.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("No result received for recipe 7")
    );
}

#[tokio::test(start_paused = true)]
async fn test_drop_mid_fetch_publishes_nothing() {
    let repository = ScriptedRepository::new().delay("42", Duration::from_millis(1000));
    let vm = DetailsViewModel::new(Arc::new(repository.clone()), "42");
    let updates = vm.subscribe();

    sleep(Duration::from_millis(100)).await;
    assert_eq!(repository.calls(), vec!["42"]);

    drop(vm);
    sleep(Duration::from_secs(2)).await;

    assert!(updates.has_changed().is_err());
    let state = updates.borrow();
    assert!(state.recipe.is_none());
    assert!(state.error.is_none());
}

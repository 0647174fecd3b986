//! Plain-text renderings of the search and details screens.

use crate::viewmodel::{DetailsUiState, SearchUiState, TransientError};
use std::fmt::Write;

const LOADING: &str = "Loading...";

pub struct SearchScreen;

impl SearchScreen {
    pub fn render(state: &SearchUiState) -> String {
        let mut out = String::from("Recipes\n");
        let _ = writeln!(out, "Search: {}", state.query);

        if state.is_loading {
            out.push_str(LOADING);
            out.push('\n');
        } else if !state.pending && !state.query.is_empty() && state.results.is_empty() {
            let _ = writeln!(out, "No Results For \"{}\"!", state.query);
        } else {
            for recipe in &state.results {
                let _ = writeln!(
                    out,
                    "- {} ({}) [{}]",
                    recipe.title, recipe.publisher, recipe.recipe_id
                );
            }
        }

        out
    }
}

pub struct DetailsScreen;

impl DetailsScreen {
    pub fn render(state: &DetailsUiState) -> String {
        if state.is_loading {
            return format!("{}\n", LOADING);
        }

        let mut out = String::new();
        let Some(recipe) = &state.recipe else {
            return out;
        };

        let _ = writeln!(out, "{}  {:.0}", recipe.title, recipe.social_rank);
        if !recipe.image_url.is_empty() {
            let _ = writeln!(out, "Image: {}", recipe.image_url);
        }
        if !recipe.publisher.is_empty() {
            let _ = writeln!(out, "By {}", recipe.publisher);
        }
        out.push_str("\nIngredients\n");
        for ingredient in &recipe.ingredients {
            let _ = writeln!(out, "  {}", ingredient);
        }

        out
    }
}

/// Show the pending error once: it is cleared as soon as it is returned.
pub fn show_error<V: TransientError + ?Sized>(view_model: &V) -> Option<String> {
    view_model
        .take_error()
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;
    use std::cell::RefCell;

    fn pizza() -> Recipe {
        Recipe {
            recipe_id: "47746".to_string(),
            title: "Best Pizza Dough Ever".to_string(),
            publisher: "101 Cookbooks".to_string(),
            social_rank: 100.0,
            ingredients: vec!["flour".to_string(), "water".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_search_loading() {
        let state = SearchUiState {
            query: "pizza".to_string(),
            is_loading: true,
            results: vec![pizza()],
            error: None,
            pending: true,
        };

        let out = SearchScreen::render(&state);
        assert!(out.contains(LOADING));
        assert!(!out.contains("Best Pizza"));
    }

    #[test]
    fn test_search_no_results() {
        let state = SearchUiState {
            query: "zzz".to_string(),
            ..Default::default()
        };

        assert!(SearchScreen::render(&state).contains("No Results For \"zzz\"!"));
    }

    #[test]
    fn test_search_pending_query_keeps_previous_list() {
        let state = SearchUiState {
            query: "pizza d".to_string(),
            results: vec![pizza()],
            pending: true,
            ..Default::default()
        };

        let out = SearchScreen::render(&state);
        assert!(out.contains("- Best Pizza Dough Ever"));
        assert!(!out.contains("No Results"));

        let waiting = SearchUiState {
            query: "zzz".to_string(),
            pending: true,
            ..Default::default()
        };
        assert!(!SearchScreen::render(&waiting).contains("No Results"));
    }

    #[test]
    fn test_search_empty_query_shows_no_message() {
        let out = SearchScreen::render(&SearchUiState::default());
        assert!(!out.contains("No Results"));
    }

    #[test]
    fn test_search_lists_results() {
        let state = SearchUiState {
            query: "pizza".to_string(),
            results: vec![pizza()],
            ..Default::default()
        };

        let out = SearchScreen::render(&state);
        assert!(out.contains("- Best Pizza Dough Ever (101 Cookbooks) [47746]"));
    }

    #[test]
    fn test_details_render() {
        let state = DetailsUiState {
            recipe_id: "47746".to_string(),
            recipe: Some(pizza()),
            is_loading: false,
            error: None,
        };

        let out = DetailsScreen::render(&state);
        assert!(out.starts_with("Best Pizza Dough Ever  100"));
        assert!(out.contains("Ingredients\n  flour\n  water\n"));
    }

    #[test]
    fn test_details_loading() {
        let state = DetailsUiState {
            is_loading: true,
            ..Default::default()
        };
        assert_eq!(DetailsScreen::render(&state), "Loading...\n");
    }

    struct FakeErrors(RefCell<Option<String>>);

    impl TransientError for FakeErrors {
        fn take_error(&self) -> Option<String> {
            self.0.borrow_mut().take()
        }
    }

    #[test]
    fn test_show_error_once() {
        let vm = FakeErrors(RefCell::new(Some("Network down".to_string())));

        assert_eq!(show_error(&vm).as_deref(), Some("Network down"));
        assert_eq!(show_error(&vm), None);
    }

    #[test]
    fn test_show_error_skips_blank() {
        let vm = FakeErrors(RefCell::new(Some("  ".to_string())));
        assert_eq!(show_error(&vm), None);
        assert!(vm.0.borrow().is_none());
    }
}

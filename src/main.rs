use clap::{Parser, Subcommand};
use log::{debug, error, info};
use recipe_browser::screen::show_error;
use recipe_browser::{DetailsScreen, RecipeBrowser, SearchScreen, SearchUiState};
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "recipes", version, about = "Browse recipes from the command line")]
struct Cli {
    /// Config file name, without extension
    #[arg(long, default_value = "recipes")]
    config: String,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes once and print the results
    Search { query: String },
    /// Show a recipe with its ingredients
    Show { id: String },
    /// Type queries line by line; results refresh as you go
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{:?}", cli);

    let config = recipe_browser::config::load_config(&cli.config)?;
    let mut builder = RecipeBrowser::builder().config(config);
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    let browser = builder.build()?;

    match cli.command {
        Command::Search { query } => search(&browser, query).await,
        Command::Show { id } => show(&browser, &id).await,
        Command::Interactive => interactive(&browser).await,
    }
}

async fn search(browser: &RecipeBrowser, query: String) -> Result<(), Box<dyn Error>> {
    let results = browser.search(&query).await?;
    let state = SearchUiState {
        query,
        results,
        ..Default::default()
    };
    print!("{}", SearchScreen::render(&state));
    Ok(())
}

async fn show(browser: &RecipeBrowser, id: &str) -> Result<(), Box<dyn Error>> {
    let view_model = browser.details_view_model(id);
    let state = view_model.finished().await;

    if let Some(message) = show_error(&view_model) {
        error!("Failed to load recipe {}: {}", id, message);
        return Err(message.into());
    }

    print!("{}", DetailsScreen::render(&state));
    Ok(())
}

async fn interactive(browser: &RecipeBrowser) -> Result<(), Box<dyn Error>> {
    let view_model = browser.search_view_model();
    let mut updates = view_model.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!(
        "Interactive search started (debounce {} ms)",
        browser.config().search.debounce_ms
    );

    let mut last_rendered = None;
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(text) => view_model.on_search_text_change(text),
                None => break,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if state.error.is_some() {
                    if let Some(message) = show_error(&view_model) {
                        eprintln!("Error: {}", message);
                    }
                    continue;
                }
                print!("{}", SearchScreen::render(&state));
                last_rendered = Some(state);
            }
        }
    }

    // Input ended; let the last query finish before exiting
    let state = view_model.settled().await;
    if let Some(message) = show_error(&view_model) {
        error!("Search for '{}' failed: {}", state.query.trim(), message);
        return Err(message.into());
    }
    if last_rendered.as_ref() != Some(&state) {
        print!("{}", SearchScreen::render(&state));
    }
    Ok(())
}

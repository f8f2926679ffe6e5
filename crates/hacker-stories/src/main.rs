use anyhow::{Context, Result};
use hacker_stories_config::{AppConfig, FileTextStore, MemoryTextStore, TextStore};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod story_source;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, GlobalAction, LifecycleAction};
use middleware::{
    keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware,
    search_storage_middleware::{SearchStorageMiddleware, SEARCH_KEY},
    stories_middleware::StoriesMiddleware,
    story_list_middleware::StoryListMiddleware,
    text_input_middleware::TextInputMiddleware,
};
use state::AppState;
use store::Store;
use story_source::MockStorySource;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting hacker-stories, logging to {:?}", log_file);

    let config = AppConfig::load();
    let text_store = open_text_store();
    let search = text_store.get(SEARCH_KEY, &config.default_search);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    let source =
        MockStorySource::new(config.fetch_delay()).failing(config.simulate_fetch_failure);

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(search));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(TextInputMiddleware::new()));
    store.add_middleware(Box::new(StoriesMiddleware::new(
        runtime.handle().clone(),
        source,
    )));
    store.add_middleware(Box::new(SearchStorageMiddleware::new(text_store)));
    store.add_middleware(Box::new(StoryListMiddleware::new(
        runtime.handle().clone(),
    )));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::Lifecycle(LifecycleAction::Mounted));

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    store.dispatch(Action::Lifecycle(LifecycleAction::Unmounted));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting hacker-stories");
    result
}

/// The persisted store, or an in-memory one when no storage path is usable
fn open_text_store() -> Box<dyn TextStore> {
    match FileTextStore::load() {
        Ok(store) => {
            log::info!("Using storage file {:?}", store.path());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("No storage available, search text will not persist: {:#}", e);
            Box::new(MemoryTextStore::new())
        }
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &mut Store) -> Result<()> {
    loop {
        // Apply results from background tasks
        store.process_pending();

        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}

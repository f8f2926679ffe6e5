//! SearchStorageMiddleware - persists the search text across sessions

use crate::actions::{Action, LifecycleAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use hacker_stories_config::TextStore;

/// Key the search text is stored under
pub const SEARCH_KEY: &str = "search";

pub struct SearchStorageMiddleware {
    store: Box<dyn TextStore>,
}

impl SearchStorageMiddleware {
    pub fn new(store: Box<dyn TextStore>) -> Self {
        Self { store }
    }

    fn persist(&mut self, term: &str) {
        if let Err(e) = self.store.set(SEARCH_KEY, term) {
            log::warn!("Failed to persist search text: {:#}", e);
        }
    }
}

impl Middleware for SearchStorageMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Lifecycle(LifecycleAction::Mounted) => self.persist(&state.search.term),
            Action::Search(SearchAction::Changed(term)) => self.persist(term),
            _ => {}
        }

        true
    }
}

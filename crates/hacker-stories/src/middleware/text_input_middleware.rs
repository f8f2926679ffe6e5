//! TextInputMiddleware - translates generic TextInput actions for the focused input
//!
//! The search box is the only text input; edits become `SearchAction::Changed`
//! carrying the complete new value.

use crate::actions::{Action, GlobalAction, SearchAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Focus};

pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::TextInput(input) = action else {
            return true;
        };

        if state.focus != Focus::Search {
            log::debug!("TextInput {:?} without a focused input, ignoring", input);
            return false;
        }

        match input {
            TextInputAction::Confirm | TextInputAction::Escape => {
                dispatcher.dispatch(Action::Global(GlobalAction::Focus(Focus::List)));
            }
            edit => {
                if let Some(term) = edit.apply(&state.search.term) {
                    dispatcher.dispatch(Action::Search(SearchAction::Changed(term)));
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn run(state: &AppState, input: TextInputAction) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        assert!(!TextInputMiddleware::new().handle(
            &Action::TextInput(input),
            state,
            &dispatcher
        ));
        rx.try_iter().collect()
    }

    #[test]
    fn test_char_produces_full_new_value() {
        let state = AppState::new("Redu");
        let actions = run(&state, TextInputAction::Char('x'));
        assert!(matches!(
            actions.as_slice(),
            [Action::Search(SearchAction::Changed(term))] if term == "Redux"
        ));
    }

    #[test]
    fn test_backspace_on_empty_input_is_silent() {
        let state = AppState::new("");
        assert!(run(&state, TextInputAction::Backspace).is_empty());
    }

    #[test]
    fn test_confirm_moves_focus_to_list() {
        let actions = run(&AppState::new("React"), TextInputAction::Confirm);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Focus(Focus::List))]
        ));
    }

    #[test]
    fn test_ignored_when_list_focused() {
        let mut state = AppState::new("React");
        state.focus = Focus::List;
        assert!(run(&state, TextInputAction::Char('a')).is_empty());
    }
}

//! KeyboardMiddleware - translates keyboard events into focus-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C quits regardless of focus.
//!
//! ## Layer 2: Capabilities
//! When the focused panel has TEXT_INPUT, editing keys become generic
//! `TextInputAction`s instead of keybindings.
//!
//! ## Layer 3: Keymap
//! Everything else is looked up in the keymap.

use crate::actions::{Action, GlobalAction, StoryListAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let capabilities = state.focus.capabilities();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            if let Some(action) = text_input_action(key) {
                log::debug!("Layer 2: TEXT_INPUT - routing {:?}", action);
                dispatcher.dispatch(Action::TextInput(action));
                return;
            }

            if capabilities.supports_item_navigation() {
                match key.code {
                    KeyCode::Down => {
                        dispatcher.dispatch(Action::StoryList(StoryListAction::NavigateNext));
                        return;
                    }
                    KeyCode::Up => {
                        dispatcher
                            .dispatch(Action::StoryList(StoryListAction::NavigatePrevious));
                        return;
                    }
                    _ => {}
                }
            }

            match key.code {
                KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    dispatcher.dispatch(Action::Global(GlobalAction::FocusPrevious));
                    return;
                }
                KeyCode::Tab => {
                    dispatcher.dispatch(Action::Global(GlobalAction::FocusNext));
                    return;
                }
                KeyCode::BackTab => {
                    dispatcher.dispatch(Action::Global(GlobalAction::FocusPrevious));
                    return;
                }
                _ => {}
            }

            // Anything else while typing is ignored rather than treated as a command
            log::debug!("Layer 2: ignoring {:?} in text input", key.code);
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup
        // ═══════════════════════════════════════════════════════════════════

        if let Some(command) = state.keymap.match_key(&key) {
            log::debug!("Layer 3: {:?} -> {:?}", key.code, command);
            dispatcher.dispatch(command.to_action());
        } else {
            log::debug!("Layer 3: no binding for {:?}", key.code);
        }
    }
}

/// Editing keys of a text input, if `key` is one
fn text_input_action(key: KeyEvent) -> Option<TextInputAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('u') if ctrl => Some(TextInputAction::ClearLine),
        KeyCode::Char(c) if !ctrl && !alt => Some(TextInputAction::Char(c)),
        // Cmd+Backspace on Mac
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Some(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Some(TextInputAction::Backspace),
        KeyCode::Enter => Some(TextInputAction::Confirm),
        KeyCode::Esc => Some(TextInputAction::Escape),
        _ => None,
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use std::sync::mpsc;

    fn press(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();

        let action = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)));
        assert!(!middleware.handle(&action, state, &dispatcher));
        rx.try_iter().collect()
    }

    fn list_focused() -> AppState {
        let mut state = AppState::default();
        state.focus = Focus::List;
        state
    }

    #[test]
    fn test_ctrl_c_quits_from_search() {
        let actions = press(&AppState::default(), KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_chars_go_to_search_input() {
        let actions = press(&AppState::default(), KeyCode::Char('d'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Char('d'))]
        ));
    }

    #[test]
    fn test_chars_are_commands_in_list() {
        let actions = press(&list_focused(), KeyCode::Char('d'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::StoryList(StoryListAction::DismissSelected)]
        ));
    }

    #[test]
    fn test_arrows_move_cursor_while_typing() {
        let actions = press(&AppState::default(), KeyCode::Down, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::StoryList(StoryListAction::NavigateNext)]
        ));
    }

    #[test]
    fn test_tab_switches_focus() {
        let actions = press(&AppState::default(), KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::FocusNext)]
        ));

        let actions = press(&list_focused(), KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::FocusPrevious)]
        ));
    }

    #[test]
    fn test_unbound_key_dispatches_nothing() {
        let actions = press(&list_focused(), KeyCode::Char('z'), KeyModifiers::NONE);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        assert!(middleware.handle(
            &Action::Global(GlobalAction::Quit),
            &AppState::default(),
            &dispatcher
        ));
    }
}

//! Footer View Model
//!
//! Key hints for the focused panel, generated from the keymap.

use crate::command_id::CommandId;
use crate::state::{AppState, Focus};
use ratatui::style::Style;

/// A single "keys description" pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterHint {
    pub keys: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct FooterViewModel {
    pub hints: Vec<FooterHint>,
    pub key_style: Style,
    pub description_style: Style,
}

impl FooterViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let hints = match state.focus {
            // Typing owns the printable keys, so these are fixed
            Focus::Search => vec![
                hint("type", "Search"),
                hint("↑/↓", "Select"),
                hint("Enter", "Go to list"),
                hint("Tab", CommandId::FocusNext.label()),
                hint("Ctrl+C", CommandId::GlobalQuit.label()),
            ],
            Focus::List => [
                CommandId::StoryNext,
                CommandId::StoryPrevious,
                CommandId::StoryDismiss,
                CommandId::StoryOpen,
                CommandId::FocusSearch,
                CommandId::GlobalQuit,
            ]
            .into_iter()
            .filter_map(|command| {
                state
                    .keymap
                    .compact_hint_for_command(command)
                    .map(|keys| hint(&keys, command.label()))
            })
            .collect(),
        };

        Self {
            hints,
            key_style: state.theme.key_hint(),
            description_style: state.theme.key_description(),
        }
    }
}

fn hint(keys: &str, description: &str) -> FooterHint {
    FooterHint {
        keys: keys.to_string(),
        description: description.to_string(),
    }
}

//! Command identifiers
//!
//! Semantic commands users can trigger from the keymap.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, GlobalAction, StoryListAction};
use crate::state::Focus;

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `StoryDismiss` -> `"story_dismiss"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Story list ===
    /// Move the cursor to the next story
    StoryNext,
    /// Move the cursor to the previous story
    StoryPrevious,
    /// Jump to the first story
    StoryFirst,
    /// Jump to the last story
    StoryLast,
    /// Remove the story under the cursor
    StoryDismiss,
    /// Open the story link in the browser
    StoryOpen,

    // === Focus ===
    /// Put the cursor into the search input
    FocusSearch,
    /// Cycle focus forward
    FocusNext,
    /// Cycle focus backward
    FocusPrevious,

    // === General ===
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// The action this command dispatches
    pub fn to_action(self) -> Action {
        match self {
            Self::StoryNext => Action::StoryList(StoryListAction::NavigateNext),
            Self::StoryPrevious => Action::StoryList(StoryListAction::NavigatePrevious),
            Self::StoryFirst => Action::StoryList(StoryListAction::NavigateToTop),
            Self::StoryLast => Action::StoryList(StoryListAction::NavigateToBottom),
            Self::StoryDismiss => Action::StoryList(StoryListAction::DismissSelected),
            Self::StoryOpen => Action::StoryList(StoryListAction::OpenSelected),
            Self::FocusSearch => Action::Global(GlobalAction::Focus(Focus::Search)),
            Self::FocusNext => Action::Global(GlobalAction::FocusNext),
            Self::FocusPrevious => Action::Global(GlobalAction::FocusPrevious),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short label for key hints
    pub fn label(self) -> &'static str {
        match self {
            Self::StoryNext => "Next",
            Self::StoryPrevious => "Previous",
            Self::StoryFirst => "First",
            Self::StoryLast => "Last",
            Self::StoryDismiss => "Dismiss",
            Self::StoryOpen => "Open",
            Self::FocusSearch => "Search",
            Self::FocusNext => "Switch",
            Self::FocusPrevious => "Switch back",
            Self::GlobalQuit => "Quit",
        }
    }
}

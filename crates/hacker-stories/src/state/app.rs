//! Application State

use crate::domain_models::{filter_stories, FetchStatus, Story};
use crate::keybindings::{default_keymap, Keymap};
use crate::theme::Theme;

use super::{Focus, SearchState, StoryListState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    pub search: SearchState,
    /// Every story currently in the list, filtered or not
    pub stories: Vec<Story>,
    pub fetch_status: FetchStatus,
    pub story_list: StoryListState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
}

impl AppState {
    /// Initial state with the search input pre-filled with `search_term`
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search: SearchState::new(search_term),
            ..Self::default()
        }
    }

    /// Stories matching the current search text
    pub fn visible_stories(&self) -> Vec<&Story> {
        filter_stories(&self.stories, &self.search.term)
    }

    /// Visible story under the list cursor
    pub fn selected_story(&self) -> Option<&Story> {
        self.visible_stories()
            .get(self.story_list.selected)
            .copied()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            search: SearchState::default(),
            stories: Vec::new(),
            fetch_status: FetchStatus::default(),
            story_list: StoryListState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
        }
    }
}

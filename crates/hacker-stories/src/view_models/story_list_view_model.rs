//! View model for the story list
//!
//! Pre-computes row texts and styles so the widget only lays them out.

use crate::domain_models::Story;
use crate::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::style::Style;

/// Label of the per-row dismiss control
pub const DISMISS_LABEL: &str = "[Dismiss]";

/// View model for the whole list
#[derive(Debug, Clone)]
pub struct StoryListViewModel {
    /// One row per visible story, in list order
    pub rows: Vec<StoryRowViewModel>,
    /// Border (highlighted when the list has focus) and header styles
    pub border_style: Style,
    pub header_style: Style,
}

/// View model for a single story row
#[derive(Debug, Clone)]
pub struct StoryRowViewModel {
    /// Row identity (`objectID` of the story)
    #[allow(dead_code)]
    pub key: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub comments: String, // "3"
    pub points: String,   // "4"
    pub dismiss: &'static str,

    /// Pre-computed styles
    pub row_style: Style,
    pub title_style: Style,
    pub url_style: Style,
}

impl StoryListViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AppState) -> Self {
        let focused = state.focus == Focus::List;
        let selected_index = state.story_list.selected;

        let rows = state
            .visible_stories()
            .into_iter()
            .enumerate()
            .map(|(index, story)| Self::build_row(story, index, selected_index, &state.theme))
            .collect();

        Self {
            rows,
            border_style: state.theme.panel_border(focused),
            header_style: state.theme.muted(),
        }
    }

    fn build_row(
        story: &Story,
        index: usize,
        cursor_index: usize,
        theme: &Theme,
    ) -> StoryRowViewModel {
        // Alternating backgrounds, cursor row highlighted
        let (row_style, title_style) = if index == cursor_index {
            (theme.selected(), theme.selected())
        } else if index % 2 == 1 {
            (theme.text().bg(theme.bg_row_alt), theme.link())
        } else {
            (theme.text(), theme.link())
        };

        StoryRowViewModel {
            key: story.object_id,
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            comments: story.num_comments.to_string(),
            points: story.points.to_string(),
            dismiss: DISMISS_LABEL,
            row_style,
            title_style,
            url_style: theme.muted(),
        }
    }
}

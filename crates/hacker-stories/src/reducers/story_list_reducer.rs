//! Story List Reducer
//!
//! Cursor movement over the visible stories. Dismiss and open are side
//! effects resolved by the story list middleware.

use crate::actions::StoryListAction;
use crate::state::StoryListState;

/// Reduce the cursor for a list currently showing `visible` rows
pub fn reduce_story_list(
    mut state: StoryListState,
    action: &StoryListAction,
    visible: usize,
) -> StoryListState {
    match action {
        StoryListAction::NavigateNext => {
            if visible > 0 {
                state.selected = (state.selected + 1) % visible;
            }
        }
        StoryListAction::NavigatePrevious => {
            if visible > 0 {
                state.selected = if state.selected == 0 {
                    visible - 1
                } else {
                    state.selected - 1
                };
            }
        }
        StoryListAction::NavigateToTop => {
            state.selected = 0;
        }
        StoryListAction::NavigateToBottom => {
            state.selected = visible.saturating_sub(1);
        }
        StoryListAction::DismissSelected | StoryListAction::OpenSelected => {
            // Handled by middleware
        }
    }
    state
}

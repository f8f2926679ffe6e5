use crate::actions::{Action, GlobalAction};
use crate::reducers::{fetch_reducer, search_reducer, stories_reducer, story_list_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::FocusNext) => {
            state.focus = state.focus.next();
        }
        Action::Global(GlobalAction::FocusPrevious) => {
            state.focus = state.focus.prev();
        }
        Action::Global(GlobalAction::Focus(focus)) => {
            state.focus = *focus;
        }
        Action::Search(search_action) => {
            state.search = search_reducer::reduce_search(state.search, search_action);
            // A new filter starts at the first match
            state.story_list.selected = 0;
        }
        Action::Fetch(fetch_action) => {
            state.fetch_status = fetch_reducer::reduce_fetch(state.fetch_status, fetch_action);
        }
        Action::Stories(stories_action) => {
            state.stories = stories_reducer::reduce_stories(state.stories, stories_action);
        }
        Action::StoryList(list_action) => {
            let visible = state.visible_stories().len();
            state.story_list =
                story_list_reducer::reduce_story_list(state.story_list, list_action, visible);
        }
        Action::Global(GlobalAction::KeyPressed(_))
        | Action::Lifecycle(_)
        | Action::TextInput(_) => {
            // Consumed by middleware
        }
    }

    let visible = state.visible_stories().len();
    state.story_list.clamp(visible);

    state
}

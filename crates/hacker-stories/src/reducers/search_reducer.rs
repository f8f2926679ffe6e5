use crate::actions::SearchAction;
use crate::state::SearchState;

pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::Changed(term) => {
            state.term = term.clone();
        }
    }
    state
}

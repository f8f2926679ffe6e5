//! Stories Reducer
//!
//! Pure list reducer: replaces the list or removes stories by `object_id`.

use crate::actions::StoriesAction;
use crate::domain_models::Story;

pub fn reduce_stories(state: Vec<Story>, action: &StoriesAction) -> Vec<Story> {
    match action {
        StoriesAction::Set(stories) => stories.clone(),
        StoriesAction::Remove(story) => state
            .into_iter()
            .filter(|s| s.object_id != story.object_id)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react() -> Story {
        Story::new(0, "React", "https://reactjs.org/")
            .with_author("Jordan Walke")
            .with_stats(3, 4)
    }

    fn redux() -> Story {
        Story::new(1, "Redux", "https://redux.js.org/")
            .with_author("Dan Abramov, Andrew Clark")
            .with_stats(2, 5)
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let list = vec![react(), redux()];
        let absent = Story::new(42, "Vue", "https://vuejs.org/");
        assert_eq!(
            reduce_stories(list.clone(), &StoriesAction::Remove(absent)),
            list
        );
    }

    #[test]
    fn test_remove_drops_exactly_one_matching_story() {
        let list = vec![react(), redux()];
        let result = reduce_stories(list.clone(), &StoriesAction::Remove(react()));

        assert_eq!(result.len(), list.len() - 1);
        assert!(result.iter().all(|s| s.object_id != 0));
        assert_eq!(result, vec![redux()]);
    }

    #[test]
    fn test_remove_matches_on_object_id_only() {
        // Same id with different fields still removes the stored record
        let probe = Story::new(1, "renamed", "");
        let result = reduce_stories(vec![react(), redux()], &StoriesAction::Remove(probe));
        assert_eq!(result, vec![react()]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let rust = Story::new(2, "Rust", "https://rust-lang.org/");
        let tokio = Story::new(3, "Tokio", "https://tokio.rs/");
        let list = vec![react(), rust.clone(), redux(), tokio.clone()];

        let result = reduce_stories(list, &StoriesAction::Remove(redux()));
        assert_eq!(result, vec![react(), rust, tokio]);
    }

    #[test]
    fn test_set_replaces_regardless_of_prior_state() {
        let replacement = vec![redux()];
        for prior in [vec![], vec![react()], vec![react(), redux()]] {
            assert_eq!(
                reduce_stories(prior, &StoriesAction::Set(replacement.clone())),
                replacement
            );
        }
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let action = StoriesAction::Remove(react());
        let once = reduce_stories(vec![react(), redux()], &action);
        let twice = reduce_stories(once.clone(), &action);
        assert_eq!(once, twice);
    }
}

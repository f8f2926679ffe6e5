//! Story search filter

use super::Story;

/// Stories whose title contains `term`, ignoring case, in list order
///
/// An empty term matches every story.
pub fn filter_stories<'a>(stories: &'a [Story], term: &str) -> Vec<&'a Story> {
    let needle = term.to_lowercase();
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}

//! Story list actions
//!
//! The only two ways the story list changes. Being a closed enum, an
//! unknown action kind cannot reach the stories reducer.

use crate::domain_models::Story;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// Replace the whole list
    Set(Vec<Story>),
    /// Remove every story with the same `object_id`
    Remove(Story),
}

//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod focus;
mod search;
mod story_list;

pub use app::AppState;
pub use focus::Focus;
pub use search::SearchState;
pub use story_list::StoryListState;

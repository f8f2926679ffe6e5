//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod fetch_status;
pub mod story;
pub mod story_filter;

pub use fetch_status::FetchStatus;
pub use story::Story;
pub use story_filter::filter_stories;

pub mod footer;
pub mod input_with_label;
pub mod stories_view;
pub mod story_list_view;

pub use stories_view::render;

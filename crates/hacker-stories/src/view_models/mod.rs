pub mod footer_view_model;
pub mod story_list_view_model;

pub use footer_view_model::FooterViewModel;
pub use story_list_view_model::StoryListViewModel;

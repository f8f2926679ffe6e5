//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - Generic actions (TextInput) that are translated for the focused panel
//! - Global and lifecycle actions that affect the whole application
//! - Domain actions that are already targeted at one slice of state

pub mod fetch;
pub mod global;
pub mod lifecycle;
pub mod search;
pub mod stories;
pub mod story_list;
pub mod text_input;

pub use fetch::FetchAction;
pub use global::GlobalAction;
pub use lifecycle::LifecycleAction;
pub use search::SearchAction;
pub use stories::StoriesAction;
pub use story_list::StoryListAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (keys, focus, quit)
    Global(GlobalAction),
    /// Mount / unmount of the stories screen
    Lifecycle(LifecycleAction),
    /// Generic text input - translated by the text input middleware
    TextInput(TextInputAction),
    /// Search text changes
    Search(SearchAction),
    /// Story fetch lifecycle
    Fetch(FetchAction),
    /// Story list contents
    Stories(StoriesAction),
    /// Cursor and row commands of the story list
    StoryList(StoryListAction),
}

//! Story fetch actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchAction {
    /// Fetch started
    Started,
    /// Fetch resolved; the stories arrive separately via `StoriesAction::Set`
    Succeeded,
    /// Fetch rejected (reason)
    Failed(String),
}

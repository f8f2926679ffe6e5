//! Fetch status model
//!
//! Lifecycle of the story fetch as a single state machine:
//! `Idle -> Loading -> Loaded | Failed`.

/// Current state of the story fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch started yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch resolved and the story list was replaced
    Loaded,
    /// Fetch rejected
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

//! Actions for the story list panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Dismiss the story under the cursor
    DismissSelected,
    /// Open the link of the story under the cursor
    OpenSelected,
}

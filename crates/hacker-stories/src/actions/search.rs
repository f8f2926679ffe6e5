#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Search text replaced by the given value
    Changed(String),
}

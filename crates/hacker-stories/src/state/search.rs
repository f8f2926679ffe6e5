/// Search input state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
}

impl SearchState {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

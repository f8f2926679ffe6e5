/// Story list panel state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryListState {
    /// Cursor position within the visible (filtered) stories
    pub selected: usize,
}

impl StoryListState {
    /// Keep the cursor inside a list of `len` rows
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let mut state = StoryListState { selected: 5 };
        state.clamp(2);
        assert_eq!(state.selected, 1);

        state.clamp(0);
        assert_eq!(state.selected, 0);

        state.clamp(10);
        assert_eq!(state.selected, 0);
    }
}

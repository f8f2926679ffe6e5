//! Text input actions - generic keystrokes for whichever input has focus

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Cmd+Backspace or Ctrl+U)
    ClearLine,
    /// Escape pressed - leave the input
    Escape,
    /// Enter pressed - confirm the input
    Confirm,
}

impl TextInputAction {
    /// The value after applying this edit to `value`
    ///
    /// Returns `None` for keys that do not edit (Escape, Confirm) and for
    /// edits that leave the value unchanged.
    pub fn apply(&self, value: &str) -> Option<String> {
        match self {
            Self::Char(c) => {
                let mut next = value.to_string();
                next.push(*c);
                Some(next)
            }
            Self::Backspace => {
                let mut next = value.to_string();
                next.pop()?;
                Some(next)
            }
            Self::ClearLine if !value.is_empty() => Some(String::new()),
            Self::ClearLine | Self::Escape | Self::Confirm => None,
        }
    }
}

//! Global actions - not tied to any specific panel

use ratatui::crossterm::event::KeyEvent;

use crate::state::Focus;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Move focus to the next panel
    FocusNext,
    /// Move focus to the previous panel
    FocusPrevious,
    /// Focus a specific panel
    Focus(Focus),
    /// Quit the application
    Quit,
}

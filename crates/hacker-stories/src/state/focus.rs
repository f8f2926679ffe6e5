//! Keyboard focus

use crate::capabilities::PanelCapabilities;

/// Panel that currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The labeled search input
    #[default]
    Search,
    /// The story list
    List,
}

impl Focus {
    /// Move to the next panel
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::List,
            Self::List => Self::Search,
        }
    }

    /// Move to the previous panel
    pub fn prev(self) -> Self {
        // Only two panels, so both directions toggle
        self.next()
    }

    pub fn capabilities(self) -> PanelCapabilities {
        match self {
            Self::Search => PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION,
            Self::List => PanelCapabilities::ITEM_NAVIGATION,
        }
    }
}

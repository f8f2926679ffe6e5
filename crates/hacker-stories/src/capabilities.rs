//! Panel capabilities
//!
//! Declares how a panel wants keyboard input routed. The keyboard
//! middleware checks these before falling back to the keymap.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PanelCapabilities: u8 {
        /// Printable keys edit text instead of triggering keybindings
        const TEXT_INPUT = 1 << 0;
        /// Panel has a cursor over a list of items
        const ITEM_NAVIGATION = 1 << 1;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(&self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(&self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

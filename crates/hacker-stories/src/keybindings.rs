//! Keybinding system
//!
//! Maps keyboard input to commands. Bindings are written as textual key
//! patterns (`"j"`, `"G"`, `"shift+tab"`, `"ctrl+c"`) so they stay readable
//! and serializable.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "j", "shift+tab"
    pub keys: String,
    /// Display hint for the UI - e.g., "Shift+Tab", "↓"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "/", "G" (case-sensitive, uppercase implies SHIFT)
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Special keys: "tab", "backtab", "enter", "esc", "delete", "up", "down"
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Uppercase letters come with SHIFT modifier from terminal
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(KeyPattern { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a new keymap; bindings with unparsable patterns are skipped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring keybinding with invalid pattern: {}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Command bound to `key`, if any
    pub fn match_key(&self, key: &KeyEvent) -> Option<CommandId> {
        self.bindings
            .iter()
            .find(|(_, pattern)| {
                // BackTab arrives with or without SHIFT depending on terminal
                if pattern.code == KeyCode::BackTab {
                    key.code == KeyCode::BackTab
                } else {
                    key.code == pattern.code && key.modifiers == pattern.modifiers
                }
            })
            .map(|(binding, _)| binding.command)
    }

    /// Get a compact hint string for a command (e.g., "j/↓" for StoryNext)
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in &self.bindings {
            if binding.command == command && !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}

/// Get the default keymap for the story list
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    Keymap::new(vec![
        // Navigation
        KeyBinding::new("j", "j", StoryNext),
        KeyBinding::new("down", "↓", StoryNext),
        KeyBinding::new("k", "k", StoryPrevious),
        KeyBinding::new("up", "↑", StoryPrevious),
        KeyBinding::new("g", "g", StoryFirst),
        KeyBinding::new("home", "Home", StoryFirst),
        KeyBinding::new("G", "G", StoryLast),
        KeyBinding::new("end", "End", StoryLast),
        // Story operations
        KeyBinding::new("d", "d", StoryDismiss),
        KeyBinding::new("delete", "Del", StoryDismiss),
        KeyBinding::new("enter", "Enter", StoryOpen),
        KeyBinding::new("o", "o", StoryOpen),
        // Focus
        KeyBinding::new("/", "/", FocusSearch),
        KeyBinding::new("tab", "Tab", FocusNext),
        KeyBinding::new("shift+tab", "Shift+Tab", FocusPrevious),
        KeyBinding::new("backtab", "Shift+Tab", FocusPrevious),
        // General
        KeyBinding::new("q", "q", GlobalQuit),
        KeyBinding::new("esc", "Esc", GlobalQuit),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_key_pattern_parsing() {
        let pattern = parse_key_pattern("G").unwrap();
        assert_eq!(pattern.code, KeyCode::Char('G'));
        assert_eq!(pattern.modifiers, KeyModifiers::SHIFT);

        let pattern = parse_key_pattern("g").unwrap();
        assert_eq!(pattern.code, KeyCode::Char('g'));
        assert_eq!(pattern.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_modifier_pattern_parsing() {
        let pattern = parse_key_pattern("ctrl+c").unwrap();
        assert_eq!(pattern.code, KeyCode::Char('c'));
        assert_eq!(pattern.modifiers, KeyModifiers::CONTROL);

        let pattern = parse_key_pattern("shift+tab").unwrap();
        assert_eq!(pattern.code, KeyCode::Tab);
        assert_eq!(pattern.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(parse_key_pattern("hyper+x").is_none());
        assert!(parse_key_pattern("notakey").is_none());
    }

    #[test]
    fn test_match_key() {
        let keymap = default_keymap();

        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(keymap.match_key(&key), Some(CommandId::StoryDismiss));

        let key = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(keymap.match_key(&key), Some(CommandId::StoryLast));

        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(keymap.match_key(&key), Some(CommandId::FocusPrevious));

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(keymap.match_key(&key), None);
    }

    #[test]
    fn test_compact_hint_joins_and_deduplicates() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::StoryNext),
            Some("j/↓".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::FocusPrevious),
            Some("Shift+Tab".to_string())
        );
    }

    #[test]
    fn test_compact_hint_returns_none_for_unmapped() {
        let keymap = Keymap::new(vec![KeyBinding::new("q", "q", CommandId::GlobalQuit)]);
        assert_eq!(keymap.compact_hint_for_command(CommandId::StoryOpen), None);
    }
}

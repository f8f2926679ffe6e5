//! Labeled single-line input
//!
//! Stateless: the widget only draws the value it is given. Keystrokes are
//! turned into a new value by `TextInputAction::apply` and handed to whoever
//! owns the value.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct InputWithLabel<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputWithLabel<'a> {
    pub fn new(label: &'a str, value: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for InputWithLabel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let indicator = if self.focused { "> " } else { "  " };
        let label_style = if self.focused {
            self.theme.text().add_modifier(Modifier::BOLD)
        } else {
            self.theme.text()
        };

        let mut spans = vec![
            Span::styled(indicator, self.theme.accent().bold()),
            Span::styled(self.label, label_style),
            Span::raw(" "),
            Span::styled(self.value, self.theme.text()),
        ];
        if self.focused {
            spans.push(Span::styled("▌", self.theme.accent()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

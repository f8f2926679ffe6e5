//! Footer Widget
//!
//! Key hints for the focused panel: `keys description  keys description ...`

use crate::view_models::FooterViewModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterWidget<'a>(pub &'a FooterViewModel);

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        let mut spans = vec![Span::raw(" ")];
        for (i, hint) in vm.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(hint.keys.as_str(), vm.key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(hint.description.as_str(), vm.description_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

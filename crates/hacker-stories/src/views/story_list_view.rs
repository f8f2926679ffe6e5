//! Story List Widget
//!
//! One row per visible story: linked title, author, comments, points and the
//! dismiss control.

use crate::view_models::StoryListViewModel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

pub struct StoryListWidget<'a>(pub &'a StoryListViewModel);

impl Widget for StoryListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        let block = Block::default()
            .title(" Stories ")
            .borders(Borders::ALL)
            .border_style(vm.border_style);

        let header = Row::new(["Title", "Author", "Comments", "Points", ""])
            .style(vm.header_style);

        let rows = vm.rows.iter().map(|row| {
            let title = Line::from(vec![
                Span::styled(row.title.as_str(), row.title_style),
                Span::raw(" "),
                Span::styled(row.url.as_str(), row.url_style),
            ]);

            Row::new(vec![
                Cell::from(title),
                Cell::from(row.author.as_str()),
                Cell::from(row.comments.as_str()),
                Cell::from(row.points.as_str()),
                Cell::from(row.dismiss),
            ])
            .style(row.row_style)
        });

        let widths = [
            Constraint::Fill(1),
            Constraint::Length(26),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(9),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

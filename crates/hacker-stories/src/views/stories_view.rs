//! Stories screen
//!
//! Top to bottom: heading, labeled search input, rule, fetch notices,
//! story list and key hints.

use crate::state::{AppState, Focus};
use crate::theme::Theme;
use crate::view_models::{FooterViewModel, StoryListViewModel};
use crate::views::footer::FooterWidget;
use crate::views::input_with_label::InputWithLabel;
use crate::views::story_list_view::StoryListWidget;
use figlet_rs::FIGfont;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HEADING: &str = "My Hacker Stories";

/// Below this height the banner would crowd out the list
const BANNER_MIN_HEIGHT: u16 = 20;

pub const ERROR_MESSAGE: &str = "Something went wrong ...";
pub const LOADING_MESSAGE: &str = "Loading ...";

/// Render the whole screen from state
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        area,
    );

    let heading = heading_lines(theme, area);
    let notices = notice_lines(state);

    let chunks = Layout::vertical([
        Constraint::Length(heading.len() as u16),
        Constraint::Length(1), // search input
        Constraint::Length(1), // rule
        Constraint::Length(notices.len() as u16),
        Constraint::Min(0), // story list
        Constraint::Length(1), // footer
    ])
    .split(area);

    f.render_widget(Paragraph::new(heading), chunks[0]);

    let search = InputWithLabel::new("Search:", &state.search.term, theme)
        .focused(state.focus == Focus::Search);
    f.render_widget(search, chunks[1]);

    f.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.muted()),
        chunks[2],
    );

    f.render_widget(Paragraph::new(notices), chunks[3]);

    let list = StoryListViewModel::from_state(state);
    f.render_widget(StoryListWidget(&list), chunks[4]);

    let footer = FooterViewModel::from_state(state);
    f.render_widget(FooterWidget(&footer), chunks[5]);
}

/// Error and loading lines, in that order
fn notice_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if state.fetch_status.is_error() {
        lines.push(Line::from(Span::styled(
            format!(" {}", ERROR_MESSAGE),
            state.theme.error(),
        )));
    }
    if state.fetch_status.is_loading() {
        lines.push(Line::from(Span::styled(
            format!(" {}", LOADING_MESSAGE),
            state.theme.warning(),
        )));
    }
    lines
}

/// FIGlet banner when it fits, plain bold text otherwise
fn heading_lines(theme: &Theme, area: Rect) -> Vec<Line<'static>> {
    let banner = (area.height >= BANNER_MIN_HEIGHT)
        .then(figlet_heading)
        .flatten()
        .filter(|lines| {
            lines
                .iter()
                .all(|line| line.chars().count() <= area.width as usize)
        });

    match banner {
        Some(lines) => lines
            .into_iter()
            .map(|line| Line::from(Span::styled(line, theme.heading())))
            .collect(),
        None => vec![Line::from(Span::styled(
            format!(" {}", HEADING),
            theme.heading(),
        ))],
    }
}

fn figlet_heading() -> Option<Vec<String>> {
    let font = FIGfont::standard().ok()?;
    let figure = font.convert(HEADING)?;

    let mut lines: Vec<String> = figure
        .to_string()
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    (!lines.is_empty()).then_some(lines)
}

//! Bottom bar: focused pane on the left, key hints on the right.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::{App, Focus};
use super::super::shortcuts::labels;
use super::super::theme::Palette;

const FOCUS_WIDTH: u16 = 12;

fn focus_name(focus: Focus) -> &'static str {
    match focus {
        Focus::Input => "INPUT",
        Focus::Previews => "PREVIEWS",
        Focus::Builder => "BUILDER",
    }
}

pub(crate) fn draw(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FOCUS_WIDTH), Constraint::Min(0)])
        .split(area);

    let focus = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", focus_name(app.focus)),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(focus, cols[0]);

    let hints = Paragraph::new(labels::bottom_bar(app.focus, palette.dim))
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Right);
    f.render_widget(hints, cols[1]);
}

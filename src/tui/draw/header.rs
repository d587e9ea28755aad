//! Header: version, title, theme indicator, and a one-line description.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app::{TITLE, VERSION};
use crate::core::theme::ThemeMode;

use super::super::app::App;
use super::super::theme::Palette;

const SUBTITLE: &str = "Enter text to see it with every Unicode space type";

/// Width for the theme indicator (e.g. "☾ dark").
const THEME_HEADER_WIDTH: u16 = 12;

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(THEME_HEADER_WIDTH),
            Constraint::Min(0),
            Constraint::Length(THEME_HEADER_WIDTH),
        ])
        .split(rows[0]);

    let version = Line::from(Span::styled(
        format!("◆ v{}", VERSION),
        Style::default().fg(palette.dim),
    ));
    f.render_widget(Paragraph::new(version), top[0]);

    let title = Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), top[1]);

    let theme_label = match app.theme {
        ThemeMode::Light => "☀ light",
        ThemeMode::Dark => "☾ dark",
    };
    let theme_line = Line::from(Span::styled(
        theme_label,
        Style::default().fg(palette.accent_secondary),
    ));
    f.render_widget(
        Paragraph::new(theme_line).alignment(Alignment::Right),
        top[2],
    );

    let subtitle = Line::from(Span::styled(SUBTITLE, Style::default().fg(palette.dim)));
    f.render_widget(
        Paragraph::new(subtitle).alignment(Alignment::Center),
        rows[1],
    );
}

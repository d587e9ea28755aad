//! TUI rendering: layout and widgets for the input, previews, and builder.

mod bar;
mod builder;
mod header;
mod input;
mod previews;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::{App, CopyOutcome};
use super::constants::{BUILDER_LINES, INPUT_LINES, PREVIEW_CARD_LINES};
use super::text::truncate_with_ellipsis;
use super::theme::Palette;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let palette = Palette::for_mode(app.theme);
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(INPUT_LINES),
            Constraint::Min(PREVIEW_CARD_LINES),
            Constraint::Length(BUILDER_LINES),
            Constraint::Length(2),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0], &palette);
    input::draw_input(f, app, chunks[1], &palette);
    previews::draw_previews(f, app, chunks[2], &palette);
    builder::draw_builder(f, app, chunks[3], &palette);
    bar::draw(f, app, chunks[4], &palette);

    draw_toast(f, app, area, &palette);
}

/// Toast: top right, below header. Opaque background so it's visible over the previews.
fn draw_toast(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(status) = app.copy_status.as_ref() else {
        return;
    };
    const HEADER_HEIGHT: u16 = 2;
    let (text, color) = match &status.outcome {
        CopyOutcome::Copied => (format!(" Copied {} ", status.key), palette.accent),
        CopyOutcome::Failed(msg) => (format!(" Copy failed: {} ", msg), palette.error),
    };
    let max_width = area.width.saturating_sub(4) as usize;
    let text = truncate_with_ellipsis(&text, max_width);
    let toast_width = text.chars().count() as u16 + 2;
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
        y: area.y + HEADER_HEIGHT,
        width: toast_width.min(area.width),
        height: 3u16.min(area.height.saturating_sub(HEADER_HEIGHT)),
    }
    .intersection(area);
    if toast_area.is_empty() {
        return;
    }
    f.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(palette.card_background));
    let para = Paragraph::new(Line::from(text)).block(block).style(
        Style::default()
            .fg(color)
            .bg(palette.card_background)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(para, toast_area);
}

//! Input editor: multi-line text with cursor and character/space counts.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::spacing;

use super::super::app::{App, Focus};
use super::super::text::{cursor_position, hard_wrap};
use super::super::theme::Palette;

pub(crate) fn draw_input(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    app.input_area_rect = Some(area);
    let focused = app.focus == Focus::Input;

    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let title = Line::from(vec![
        Span::styled(
            " Input ",
            border_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "· {} chars · {} spaces ",
                app.input.chars().count(),
                spacing::count_spaces(&app.input)
            ),
            Style::default().fg(palette.dim),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_top(title);
    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;
    let height = inner.height as usize;

    if app.input.is_empty() {
        let placeholder = Span::styled(
            "Type or paste text...",
            Style::default().fg(palette.dim),
        );
        f.render_widget(Paragraph::new(Line::from(placeholder)).block(block), area);
        if focused && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let lines = hard_wrap(&app.input, width);
    let (cursor_line, cursor_col) = cursor_position(&app.input, app.input_cursor, width);
    let total_lines = lines.len().max(cursor_line + 1);
    let scroll_y = cursor_line
        .saturating_sub(height.saturating_sub(1))
        .min(total_lines.saturating_sub(height));

    let text: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(palette.text))))
        .collect();
    let para = Paragraph::new(text)
        .block(block)
        .scroll((scroll_y as u16, 0));
    f.render_widget(para, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let cx = inner.x + cursor_col.min(inner.width.saturating_sub(1) as usize) as u16;
        let cy = inner.y + cursor_line.saturating_sub(scroll_y) as u16;
        f.set_cursor_position(Position::new(cx, cy));
    }
}

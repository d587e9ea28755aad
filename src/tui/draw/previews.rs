//! Preview grid: one card per catalog entry with the input re-rendered by that entry.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::core::catalog::{CATALOG, SpaceVariant};
use crate::core::spacing;

use super::super::app::{App, CopyKey, CopyOutcome, Focus};
use super::super::constants::{
    COPIED_MARK, FAILED_MARK, PREVIEW_CARD_LINES, PREVIEW_COLUMNS, TWO_COLUMN_MIN_WIDTH,
};
use super::super::text::{truncate_with_ellipsis, wrapped_lines};
use super::super::theme::Palette;

/// Card columns for the available width.
fn columns_for(width: u16) -> usize {
    if width >= TWO_COLUMN_MIN_WIDTH {
        PREVIEW_COLUMNS
    } else {
        1
    }
}

/// First visible row so that `selected_row` is on screen, moving as little as possible.
pub(crate) fn scroll_to_show(
    scroll: usize,
    selected_row: usize,
    visible_rows: usize,
    total_rows: usize,
) -> usize {
    let visible_rows = visible_rows.max(1);
    let scroll = if selected_row < scroll {
        selected_row
    } else if selected_row >= scroll + visible_rows {
        selected_row + 1 - visible_rows
    } else {
        scroll
    };
    scroll.min(total_rows.saturating_sub(visible_rows))
}

pub(crate) fn draw_previews(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    app.previews_area_rect = Some(area);
    app.preview_card_rects.clear();
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Leave a column for the scrollbar.
    let grid = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    let columns = columns_for(grid.width);
    app.preview_columns = columns;
    let total_rows = CATALOG.len().div_ceil(columns);
    let visible_rows = (grid.height / PREVIEW_CARD_LINES).max(1) as usize;
    let selected_row = app.selected_preview / columns;
    app.preview_scroll = scroll_to_show(app.preview_scroll, selected_row, visible_rows, total_rows);

    let card_width = grid.width / columns as u16;
    let first = app.preview_scroll * columns;
    let last = ((app.preview_scroll + visible_rows) * columns).min(CATALOG.len());

    for (idx, variant) in CATALOG.iter().enumerate().take(last).skip(first) {
        let row = (idx / columns - app.preview_scroll) as u16;
        let col = (idx % columns) as u16;
        let y = grid.y + row * PREVIEW_CARD_LINES;
        let card = Rect {
            x: grid.x + col * card_width,
            y,
            width: card_width,
            height: PREVIEW_CARD_LINES.min(grid.bottom().saturating_sub(y)),
        };
        app.preview_card_rects.push((idx, card));
        draw_card(f, app, idx, variant, card, palette);
    }

    if total_rows > visible_rows {
        let mut state = ScrollbarState::new(total_rows.saturating_sub(visible_rows))
            .position(app.preview_scroll);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(Style::default().fg(palette.dim)),
            area,
            &mut state,
        );
    }
}

fn draw_card(
    f: &mut Frame,
    app: &App,
    idx: usize,
    variant: &SpaceVariant,
    area: Rect,
    palette: &Palette,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let selected = idx == app.selected_preview;
    let border_style = match (selected, app.focus == Focus::Previews) {
        (true, true) => Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(palette.accent_secondary),
        _ => Style::default().fg(palette.dim),
    };

    let escape = spacing::code_point_escape(variant.sequence);
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", variant.label),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("({}) ", escape), Style::default().fg(palette.dim)),
    ]);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(palette.card_background))
        .title_top(title);
    match app.copy_status_for(CopyKey::Variant(variant.label)) {
        Some(CopyOutcome::Copied) => {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" {} ", COPIED_MARK),
                    Style::default().fg(palette.accent),
                ))
                .right_aligned(),
            );
        }
        Some(CopyOutcome::Failed(_)) => {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" {} ", FAILED_MARK),
                    Style::default().fg(palette.error),
                ))
                .right_aligned(),
            );
        }
        None => {}
    }
    if selected {
        block = block.title_bottom(
            Line::from(Span::styled(
                truncate_with_ellipsis(
                    &format!(" {} ", variant.description),
                    area.width.saturating_sub(2) as usize,
                ),
                Style::default().fg(palette.dim),
            ))
            .left_aligned(),
        );
    }

    let inner = block.inner(area);
    // Recomputed on every draw from the current input.
    let substituted = spacing::substitute(&app.input, variant.sequence);
    let mut lines = wrapped_lines(&substituted, inner.width);
    let max_lines = inner.height as usize;
    if lines.len() > max_lines && max_lines > 0 {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = truncate_with_ellipsis(&format!("{}…", last), inner.width as usize);
        }
    }
    let text: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(palette.text))))
        .collect();
    f.render_widget(Paragraph::new(text).block(block), area);
}

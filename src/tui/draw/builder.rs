//! Custom combination builder: picker, chosen chips, combined sequence and its preview.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::catalog;
use crate::core::spacing;

use super::super::app::{App, CopyKey, CopyOutcome, Focus};
use super::super::constants::{COPIED_MARK, FAILED_MARK};
use super::super::text::wrapped_lines;
use super::super::theme::Palette;

pub(crate) fn draw_builder(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    app.builder_area_rect = Some(area);
    if area.width == 0 || area.height == 0 {
        return;
    }
    let focused = app.focus == Focus::Builder;
    let border = if focused {
        palette.accent
    } else {
        palette.dim
    };
    let dim = Style::default().fg(palette.dim);
    let accent = Style::default().fg(palette.accent);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title_top(Line::from(Span::styled(
            " Custom combination ",
            Style::default()
                .fg(palette.accent_secondary)
                .add_modifier(Modifier::BOLD),
        )));
    match app.copy_status_for(CopyKey::Custom) {
        Some(CopyOutcome::Copied) => {
            block = block.title_top(
                Line::from(Span::styled(format!(" {} ", COPIED_MARK), accent)).right_aligned(),
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
    let inner = block.inner(area);

    let mut lines = vec![picker_line(app, palette)];
    if let Some(description) = app.combo.pending().and_then(catalog::description) {
        lines.push(Line::from(Span::styled(format!("  {}", description), dim)));
    }
    lines.push(chips_line(app, focused, palette));

    if app.combo.is_empty() {
        lines.push(Line::from(Span::styled(
            "Pick variants and add them to build a custom spacing sequence",
            dim,
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Sequence: ", dim),
            Span::styled(
                spacing::code_point_escape(&app.combo.sequence()),
                Style::default().fg(palette.text),
            ),
        ]));
        let preview = app.combo.preview(&app.input);
        let remaining = (inner.height as usize).saturating_sub(lines.len());
        for l in wrapped_lines(&preview, inner.width).into_iter().take(remaining) {
            lines.push(Line::from(Span::styled(l, Style::default().fg(palette.text))));
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// "◀ label ▶ (escape)  [add]" for the pending label, or a hint when nothing is picked.
fn picker_line(app: &App, palette: &Palette) -> Line<'static> {
    let dim = Style::default().fg(palette.dim);
    let Some(label) = app.combo.pending() else {
        return Line::from(vec![
            Span::styled("Variant: ", dim),
            Span::styled("◀ ", dim),
            Span::styled("choose with ←/→", dim),
            Span::styled(" ▶", dim),
        ]);
    };
    let escape = catalog::find(label)
        .map(|v| spacing::code_point_escape(v.sequence))
        .unwrap_or_default();
    let mut spans = vec![
        Span::styled("Variant: ", dim),
        Span::styled("◀ ", Style::default().fg(palette.accent)),
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶ ", Style::default().fg(palette.accent)),
        Span::styled(format!("({})", escape), dim),
    ];
    if app.combo.can_add() {
        spans.push(Span::styled(
            "  [Enter] add",
            Style::default().fg(palette.accent_secondary),
        ));
    } else {
        spans.push(Span::styled("  (already added)", dim));
    }
    Line::from(spans)
}

fn chips_line(app: &App, focused: bool, palette: &Palette) -> Line<'static> {
    let dim = Style::default().fg(palette.dim);
    let mut spans = vec![Span::styled("Selected: ", dim)];
    if app.combo.is_empty() {
        spans.push(Span::styled("none yet", dim));
        return Line::from(spans);
    }
    for (i, label) in app.combo.selection().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" + ", dim));
        }
        let style = if focused && i == app.chip_index {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent_secondary)
        };
        spans.push(Span::styled(format!("[{} ×]", label), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;
    use std::time::Duration;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn app() -> App {
        App::new(ThemeMode::Dark, Duration::from_millis(100))
    }

    #[test]
    fn picker_hint_when_nothing_pending() {
        let app = app();
        let palette = Palette::for_mode(app.theme);
        assert!(text_of(&picker_line(&app, &palette)).contains("choose"));
    }

    #[test]
    fn picker_marks_duplicates() {
        let mut app = app();
        let palette = Palette::for_mode(app.theme);
        app.picker_next();
        let line = text_of(&picker_line(&app, &palette));
        assert!(line.contains("Em Space"));
        assert!(line.contains("\\u2003"));
        assert!(line.contains("add"));

        app.add_pending();
        app.picker_next();
        assert_eq!(app.combo.pending(), Some("Em Space"));
        assert!(text_of(&picker_line(&app, &palette)).contains("already added"));
    }

    #[test]
    fn chips_list_selection_in_order() {
        let mut app = app();
        let palette = Palette::for_mode(app.theme);
        assert!(text_of(&chips_line(&app, true, &palette)).contains("none yet"));
        app.picker_next();
        app.add_pending();
        app.picker_next();
        app.picker_next();
        app.add_pending();
        let line = text_of(&chips_line(&app, true, &palette));
        let em = line.find("Em Space").expect("em");
        let en = line.find("En Space").expect("en");
        assert!(em < en);
    }
}

//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action         | Keys                        |
//! |----------------|-----------------------------|
//! | Next pane      | Tab                         |
//! | Previous pane  | Shift+Tab                   |
//! | Toggle theme   | Ctrl+T                      |
//! | Clear text     | Ctrl+L                      |
//! | Quit           | Ctrl+C, Ctrl+Q              |
//!
//! Pane-specific keys (edit, copy, add/remove) are handled by the pane handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Focus the next pane (Tab)
    NextFocus,
    /// Focus the previous pane (Shift+Tab, BackTab)
    PrevFocus,
    /// Switch light/dark (Ctrl+T)
    ToggleTheme,
    /// Empty the input (Ctrl+L)
    ClearInput,
    /// Quit (Ctrl+C, Ctrl+Q)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches one of the global bindings.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::ToggleTheme)
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::ClearInput)
            }
            KeyCode::BackTab => Some(Shortcut::PrevFocus),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Shortcut::PrevFocus)
            }
            KeyCode::Tab => Some(Shortcut::NextFocus),
            _ => None,
        }
    }
}


/// Labels for the bottom bar: global keys on the first line, focused-pane keys on the second.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    use crate::tui::app::Focus;

    pub fn bottom_bar(focus: Focus, dim: Color) -> Text<'static> {
        let global = Line::from(vec![
            Span::styled("Tab ", dim),
            Span::raw("next pane"),
            Span::styled("  Ctrl+T ", dim),
            Span::raw("theme"),
            Span::styled("  Ctrl+L ", dim),
            Span::raw("clear"),
            Span::styled("  Ctrl+C ", dim),
            Span::raw("quit"),
        ]);
        let pane = match focus {
            Focus::Input => Line::from(vec![
                Span::styled("Type ", dim),
                Span::raw("edit"),
                Span::styled("  Enter ", dim),
                Span::raw("newline"),
                Span::styled("  ←→ Home End ", dim),
                Span::raw("move"),
            ]),
            Focus::Previews => Line::from(vec![
                Span::styled("↑↓←→ ", dim),
                Span::raw("select"),
                Span::styled("  PgUp PgDn ", dim),
                Span::raw("page"),
                Span::styled("  Enter/c/y ", dim),
                Span::raw("copy"),
            ]),
            Focus::Builder => Line::from(vec![
                Span::styled("←→ ", dim),
                Span::raw("pick"),
                Span::styled("  Enter/a ", dim),
                Span::raw("add"),
                Span::styled("  ↑↓ ", dim),
                Span::raw("chip"),
                Span::styled("  Del/x ", dim),
                Span::raw("remove"),
                Span::styled("  Ctrl+X ", dim),
                Span::raw("clear"),
                Span::styled("  c/y ", dim),
                Span::raw("copy"),
            ]),
        };
        Text::from(vec![global, pane])
    }

}

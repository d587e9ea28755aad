//! Event handlers for the TUI: keyboard and mouse.

mod builder;
pub(crate) mod copy;
mod input;
mod previews;
mod shortcuts;

use std::sync::Arc;

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use tokio::runtime::Runtime;

use crate::core::clipboard::Clipboard;

use super::app::{App, Focus};
use super::shortcuts::Shortcut;

pub(crate) use copy::PendingCopy;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub clipboard: &'a Arc<dyn Clipboard>,
    pub pending_copies: &'a mut Vec<PendingCopy>,
    pub rt: &'a Runtime,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if let Some(shortcut) = Shortcut::match_key(&key) {
        return shortcuts::handle_shortcut(shortcut, ctx.app);
    }

    let HandleKeyContext {
        app,
        clipboard,
        pending_copies,
        rt,
    } = ctx;

    let copy_requested = match app.focus {
        Focus::Input => {
            input::handle_input_key(key.code, key.modifiers, app);
            false
        }
        Focus::Previews => previews::handle_previews_key(key.code, app),
        Focus::Builder => builder::handle_builder_key(key.code, key.modifiers, app),
    };

    if copy_requested && let Some((text, copy_key)) = app.copy_request() {
        pending_copies.push(copy::spawn_copy(rt, Arc::clone(clipboard), text, copy_key));
    }
    HandleResult::Continue
}

/// Handle pasted text (bracketed paste) as typed input.
pub fn handle_paste(text: &str, app: &mut App) {
    if app.focus == Focus::Input {
        // Terminals send CRLF for pasted newlines.
        app.insert_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
    }
}

/// Handle a mouse event: click focuses a pane (and selects the card under it in the
/// preview grid), wheel moves the preview selection by one row.
pub fn handle_mouse(mouse: crossterm::event::MouseEvent, app: &mut App) {
    let pos = Position::new(mouse.column, mouse.row);
    let hit = |rect: Option<ratatui::layout::Rect>| rect.is_some_and(|r| r.contains(pos));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if hit(app.input_area_rect) {
                app.focus = Focus::Input;
            } else if hit(app.previews_area_rect) {
                app.focus = Focus::Previews;
                app.select_preview_at(pos);
            } else if hit(app.builder_area_rect) {
                app.focus = Focus::Builder;
            }
        }
        MouseEventKind::ScrollUp if hit(app.previews_area_rect) => {
            app.select_preview_row_up();
        }
        MouseEventKind::ScrollDown if hit(app.previews_area_rect) => {
            app.select_preview_row_down();
        }
        _ => {}
    }
}

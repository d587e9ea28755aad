//! Global shortcut handling (focus, theme, clear, quit).

use crate::tui::shortcuts::Shortcut;

use super::super::app::App;
use super::HandleResult;

pub(super) fn handle_shortcut(shortcut: Shortcut, app: &mut App) -> HandleResult {
    match shortcut {
        Shortcut::NextFocus => app.focus_next(),
        Shortcut::PrevFocus => app.focus_prev(),
        Shortcut::ToggleTheme => app.toggle_theme(),
        Shortcut::ClearInput => app.clear_input(),
        Shortcut::Quit => return HandleResult::Break,
    }
    HandleResult::Continue
}

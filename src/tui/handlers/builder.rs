//! Handler for the custom combination builder.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::App;

/// Handle builder keys. Returns true when the custom preview should be copied.
pub(crate) fn handle_builder_key(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> bool {
    match (key_code, key_modifiers) {
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => app.clear_combo(),
        (KeyCode::Left, _) => app.picker_prev(),
        (KeyCode::Right, _) => app.picker_next(),
        // Empty or duplicate pending label: add is a no-op (the hint is dimmed).
        (KeyCode::Enter, _) | (KeyCode::Char('a'), _) => app.add_pending(),
        (KeyCode::Up, _) => app.chip_prev(),
        (KeyCode::Down, _) => app.chip_next(),
        (KeyCode::Delete, _) | (KeyCode::Backspace, _) | (KeyCode::Char('x'), _) => {
            app.remove_chip()
        }
        (KeyCode::Char('c'), _) | (KeyCode::Char('y'), _) => return true,
        _ => {}
    }
    false
}

//! Handler for the input editor pane.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::App;

/// Handle editor keys. Every change is picked up by the previews on the next draw.
pub(crate) fn handle_input_key(key_code: KeyCode, key_modifiers: KeyModifiers, app: &mut App) {
    match key_code {
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Char(c) => {
            // Ignore Ctrl/Alt+key: user likely intended a shortcut
            if key_modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return;
            }
            app.insert_char(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;
    use std::time::Duration;

    #[test]
    fn enter_inserts_newline_at_cursor() {
        let mut app = App::new(ThemeMode::Light, Duration::from_secs(1));
        for c in "ab".chars() {
            handle_input_key(KeyCode::Char(c), KeyModifiers::empty(), &mut app);
        }
        handle_input_key(KeyCode::Left, KeyModifiers::empty(), &mut app);
        handle_input_key(KeyCode::Enter, KeyModifiers::empty(), &mut app);
        assert_eq!(app.input, "a\nb");
    }

    #[test]
    fn ctrl_chars_are_not_inserted() {
        let mut app = App::new(ThemeMode::Light, Duration::from_secs(1));
        handle_input_key(KeyCode::Char('z'), KeyModifiers::CONTROL, &mut app);
        handle_input_key(KeyCode::Char('Z'), KeyModifiers::SHIFT, &mut app);
        assert_eq!(app.input, "Z");
    }
}

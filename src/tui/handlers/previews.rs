//! Handler for the preview grid: selection and copy.

use crossterm::event::KeyCode;

use crate::core::catalog::CATALOG;

use super::super::app::App;
use super::super::constants::PREVIEW_PAGE;

/// Handle preview keys. Returns true when the selected preview should be copied.
pub(crate) fn handle_previews_key(key_code: KeyCode, app: &mut App) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.select_preview_row_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_preview_row_down(),
        KeyCode::Left | KeyCode::Char('h') => app.select_preview_up(1),
        KeyCode::Right | KeyCode::Char('l') => app.select_preview_down(1),
        KeyCode::PageUp => app.select_preview_up(PREVIEW_PAGE * app.preview_columns.max(1)),
        KeyCode::PageDown => app.select_preview_down(PREVIEW_PAGE * app.preview_columns.max(1)),
        KeyCode::Home => app.selected_preview = 0,
        KeyCode::End => app.selected_preview = CATALOG.len() - 1,
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;
    use std::time::Duration;

    fn grid_app(columns: usize) -> App {
        let mut app = App::new(ThemeMode::Dark, Duration::from_secs(1));
        app.preview_columns = columns;
        app
    }

    #[test]
    fn arrows_move_by_row_and_column_in_two_column_grid() {
        let mut app = grid_app(2);
        handle_previews_key(KeyCode::Down, &mut app);
        assert_eq!(app.selected_preview, 2);
        handle_previews_key(KeyCode::Right, &mut app);
        assert_eq!(app.selected_preview, 3);
        handle_previews_key(KeyCode::Up, &mut app);
        assert_eq!(app.selected_preview, 1);
        handle_previews_key(KeyCode::Left, &mut app);
        assert_eq!(app.selected_preview, 0);
    }

    #[test]
    fn single_column_steps_one_card() {
        let mut app = grid_app(1);
        handle_previews_key(KeyCode::Char('j'), &mut app);
        assert_eq!(app.selected_preview, 1);
        handle_previews_key(KeyCode::PageDown, &mut app);
        assert_eq!(app.selected_preview, 1 + PREVIEW_PAGE);
        handle_previews_key(KeyCode::End, &mut app);
        assert_eq!(app.selected_preview, CATALOG.len() - 1);
    }

    #[test]
    fn copy_keys_request_copy() {
        let mut app = grid_app(2);
        assert!(handle_previews_key(KeyCode::Enter, &mut app));
        assert!(handle_previews_key(KeyCode::Char('y'), &mut app));
        assert!(!handle_previews_key(KeyCode::Char('z'), &mut app));
    }
}

//! TUI application state: input text, focus, theme, custom combination, copy status.

use std::fmt;
use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use crate::core::catalog::{self, CATALOG};
use crate::core::clipboard::CopyError;
use crate::core::combo::CustomCombination;
use crate::core::spacing;
use crate::core::theme::ThemeMode;

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Previews,
    Builder,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Previews,
            Self::Previews => Self::Builder,
            Self::Builder => Self::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Input => Self::Builder,
            Self::Previews => Self::Input,
            Self::Builder => Self::Previews,
        }
    }
}

/// What a copy was made from; owns the confirmation slot while it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKey {
    Variant(&'static str),
    Custom,
}

impl fmt::Display for CopyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variant(label) => write!(f, "{}", label),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

/// Single shared confirmation slot. A newer copy replaces it and restarts the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStatus {
    pub key: CopyKey,
    pub outcome: CopyOutcome,
    pub until: Instant,
}

pub struct App {
    /// User input in the text field.
    pub(crate) input: String,
    /// Cursor position in the input (byte index, always on a char boundary).
    pub(crate) input_cursor: usize,
    pub(crate) theme: ThemeMode,
    pub(crate) focus: Focus,
    /// Index into CATALOG of the highlighted preview card.
    pub(crate) selected_preview: usize,
    /// First card row shown; adjusted on draw to keep the selection visible.
    pub(crate) preview_scroll: usize,
    /// Cards per grid row at the last draw.
    pub(crate) preview_columns: usize,
    /// Highlighted chip in the custom selection.
    pub(crate) chip_index: usize,
    pub(crate) combo: CustomCombination,
    pub(crate) copy_status: Option<CopyStatus>,
    /// How long a copy confirmation stays visible.
    pub(crate) copy_confirm: Duration,
    /// Pane rects from last draw; used for click-to-focus.
    pub(crate) input_area_rect: Option<Rect>,
    pub(crate) previews_area_rect: Option<Rect>,
    pub(crate) builder_area_rect: Option<Rect>,
    /// Visible preview cards from last draw, as (catalog index, rect); used for click-to-select.
    pub(crate) preview_card_rects: Vec<(usize, Rect)>,
}

impl App {
    pub fn new(theme: ThemeMode, copy_confirm: Duration) -> Self {
        Self {
            input: String::new(),
            input_cursor: 0,
            theme,
            focus: Focus::Input,
            selected_preview: 0,
            preview_scroll: 0,
            preview_columns: 1,
            chip_index: 0,
            combo: CustomCombination::new(),
            copy_status: None,
            copy_confirm,
            input_area_rect: None,
            previews_area_rect: None,
            builder_area_rect: None,
            preview_card_rects: Vec::new(),
        }
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub(crate) fn insert_str(&mut self, s: &str) {
        self.input.insert_str(self.input_cursor, s);
        self.input_cursor += s.len();
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(c) = self.input[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
            self.input.remove(self.input_cursor);
        }
    }

    pub(crate) fn delete(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input.remove(self.input_cursor);
        }
    }

    pub(crate) fn cursor_left(&mut self) {
        if let Some(c) = self.input[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
        }
    }

    pub(crate) fn cursor_right(&mut self) {
        if let Some(c) = self.input[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
        }
    }

    /// Move to the start of the current line.
    pub(crate) fn cursor_home(&mut self) {
        self.input_cursor = self.input[..self.input_cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// Move to the end of the current line.
    pub(crate) fn cursor_end(&mut self) {
        self.input_cursor = self.input[self.input_cursor..]
            .find('\n')
            .map(|i| self.input_cursor + i)
            .unwrap_or(self.input.len());
    }

    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        log::debug!("theme switched to {}", self.theme);
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub(crate) fn select_preview_down(&mut self, n: usize) {
        self.selected_preview = (self.selected_preview + n).min(CATALOG.len() - 1);
    }

    pub(crate) fn select_preview_up(&mut self, n: usize) {
        self.selected_preview = self.selected_preview.saturating_sub(n);
    }

    /// Move the selection one grid row up, staying in the same column.
    pub(crate) fn select_preview_row_up(&mut self) {
        let columns = self.preview_columns.max(1);
        if self.selected_preview >= columns {
            self.selected_preview -= columns;
        }
    }

    /// Move the selection one grid row down; no-op when the column ends.
    pub(crate) fn select_preview_row_down(&mut self) {
        let next = self.selected_preview + self.preview_columns.max(1);
        if next < CATALOG.len() {
            self.selected_preview = next;
        }
    }

    /// Select the card drawn at `pos`, if any.
    pub(crate) fn select_preview_at(&mut self, pos: Position) -> bool {
        match self.preview_card_rects.iter().find(|(_, r)| r.contains(pos)) {
            Some(&(idx, _)) => {
                self.selected_preview = idx;
                true
            }
            None => false,
        }
    }

    /// Catalog index of the pending label, i.e. where the picker currently stands.
    pub(crate) fn picker_index(&self) -> Option<usize> {
        let pending = self.combo.pending()?;
        catalog::labels().position(|l| l == pending)
    }

    /// Move the picker forward; from an empty picker, start at the first entry.
    pub(crate) fn picker_next(&mut self) {
        let next = match self.picker_index() {
            Some(i) => (i + 1) % CATALOG.len(),
            None => 0,
        };
        self.select_picker(next);
    }

    /// Move the picker back; from an empty picker, start at the last entry.
    pub(crate) fn picker_prev(&mut self) {
        let prev = match self.picker_index() {
            Some(i) => (i + CATALOG.len() - 1) % CATALOG.len(),
            None => CATALOG.len() - 1,
        };
        self.select_picker(prev);
    }

    fn select_picker(&mut self, index: usize) {
        // Index comes from the catalog, so the label always exists.
        let _ = self.combo.select(CATALOG[index].label);
    }

    pub(crate) fn add_pending(&mut self) {
        if self.combo.add() {
            self.chip_index = self.combo.selection().len() - 1;
        }
    }

    pub(crate) fn chip_prev(&mut self) {
        self.chip_index = self.chip_index.saturating_sub(1);
    }

    pub(crate) fn chip_next(&mut self) {
        let len = self.combo.selection().len();
        if len > 0 {
            self.chip_index = (self.chip_index + 1).min(len - 1);
        }
    }

    /// Remove the highlighted chip.
    pub(crate) fn remove_chip(&mut self) {
        if let Some(label) = self.combo.selection().get(self.chip_index).copied() {
            self.combo.remove(label);
            self.chip_index = self
                .chip_index
                .min(self.combo.selection().len().saturating_sub(1));
        }
    }

    pub(crate) fn clear_combo(&mut self) {
        self.combo.clear();
        self.chip_index = 0;
    }

    /// Text and key to copy for the focused pane, if that pane has something to copy.
    pub(crate) fn copy_request(&self) -> Option<(String, CopyKey)> {
        match self.focus {
            Focus::Input => None,
            Focus::Previews => {
                let v = CATALOG.get(self.selected_preview)?;
                Some((
                    spacing::substitute(&self.input, v.sequence),
                    CopyKey::Variant(v.label),
                ))
            }
            Focus::Builder => {
                if self.combo.is_empty() {
                    return None;
                }
                Some((self.combo.preview(&self.input), CopyKey::Custom))
            }
        }
    }

    /// Record a finished clipboard write in the confirmation slot.
    pub(crate) fn apply_copy_result(
        &mut self,
        key: CopyKey,
        result: Result<(), CopyError>,
        now: Instant,
    ) {
        let outcome = match result {
            Ok(()) => {
                log::info!("copied {} to clipboard", key);
                CopyOutcome::Copied
            }
            Err(e) => {
                log::warn!("copy of {} failed: {}", key, e);
                CopyOutcome::Failed(e.to_string())
            }
        };
        self.copy_status = Some(CopyStatus {
            key,
            outcome,
            until: now + self.copy_confirm,
        });
    }

    /// Clear the confirmation once its deadline has passed.
    pub(crate) fn expire_copy_status(&mut self, now: Instant) {
        if self.copy_status.as_ref().is_some_and(|s| s.until <= now) {
            self.copy_status = None;
        }
    }

    /// Confirmation currently shown for `key`, if any.
    pub(crate) fn copy_status_for(&self, key: CopyKey) -> Option<&CopyOutcome> {
        self.copy_status
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| &s.outcome)
    }
}

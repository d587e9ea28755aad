//! TUI constants: timing and layout sizes.

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Input textarea height including block borders.
pub(crate) const INPUT_LINES: u16 = 7;

/// Height of one preview card including borders (two lines of text).
pub(crate) const PREVIEW_CARD_LINES: u16 = 4;

/// Preview cards side by side when the terminal is wide enough.
pub(crate) const PREVIEW_COLUMNS: usize = 2;

/// Minimum width for two preview columns; narrower terminals stack cards.
pub(crate) const TWO_COLUMN_MIN_WIDTH: u16 = 80;

/// Custom combination builder height including borders.
pub(crate) const BUILDER_LINES: u16 = 8;

/// Selection jump for PageUp/PageDown in the preview grid.
pub(crate) const PREVIEW_PAGE: usize = 4;

/// Glyph shown in card titles next to a copied preview.
pub(super) const COPIED_MARK: &str = "✓ Copied!";

/// Glyph shown in card titles when the copy failed.
pub(super) const FAILED_MARK: &str = "✗ Copy failed";

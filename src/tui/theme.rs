//! Color tokens for light and dark mode.

use ratatui::style::Color;

use crate::core::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub accent: Color,
    pub accent_secondary: Color,
    pub text: Color,
    pub dim: Color,
    pub background: Color,
    pub card_background: Color,
    pub error: Color,
}

impl Palette {
    pub(crate) fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            // Indigo primary, pink secondary on white.
            ThemeMode::Light => Self {
                accent: Color::Rgb(63, 81, 181),
                accent_secondary: Color::Rgb(245, 0, 87),
                text: Color::Rgb(33, 33, 33),
                dim: Color::Rgb(117, 117, 117),
                background: Color::Rgb(255, 255, 255),
                card_background: Color::Rgb(249, 249, 249),
                error: Color::Rgb(211, 47, 47),
            },
            // Pale green (#98FB98) and soft cyan (#7EC8E3) on near-black.
            ThemeMode::Dark => Self {
                accent: Color::Rgb(152, 251, 152),
                accent_secondary: Color::Rgb(126, 200, 227),
                text: Color::Rgb(230, 230, 230),
                dim: Color::DarkGray,
                background: Color::Rgb(18, 18, 18),
                card_background: Color::Rgb(28, 28, 28),
                error: Color::Red,
            },
        }
    }
}

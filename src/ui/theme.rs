//! Theme and styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Brand Colors
    pub primary: Color,
    pub accent: Color,

    // Background Colors
    pub bg: Color,
    pub bg_card: Color,
    pub bg_button: Color,

    // Text Colors
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,
    pub text_on_primary: Color,
}

/// Available theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeName::Dark
        } else {
            ThemeName::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeName::Dark
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::Dark => "Dark",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }
}

/// Theme struct that holds colors and provides style methods.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let colors = match name {
            ThemeName::Light => Self::light_colors(),
            ThemeName::Dark => Self::dark_colors(),
        };
        Self { name, colors }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        Self::new(ThemeName::from_dark_mode(dark_mode))
    }

    fn light_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(13, 110, 253),       // Blue
            accent: Color::Rgb(111, 66, 193),        // Purple

            bg: Color::Rgb(233, 236, 239),           // Gray 200
            bg_card: Color::Rgb(255, 255, 255),      // White
            bg_button: Color::Rgb(222, 226, 230),    // Gray 300

            text: Color::Rgb(33, 37, 41),            // Gray 900
            text_muted: Color::Rgb(73, 80, 87),      // Gray 700
            text_dim: Color::Rgb(134, 142, 150),     // Gray 600
            text_on_primary: Color::Rgb(255, 255, 255),
        }
    }

    fn dark_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(110, 168, 254),      // Blue 300
            accent: Color::Rgb(163, 137, 212),       // Purple 300

            bg: Color::Rgb(16, 18, 20),
            bg_card: Color::Rgb(33, 37, 41),         // Gray 900
            bg_button: Color::Rgb(52, 58, 64),       // Gray 800

            text: Color::Rgb(222, 226, 230),         // Gray 300
            text_muted: Color::Rgb(173, 181, 189),   // Gray 500
            text_dim: Color::Rgb(108, 117, 125),     // Gray 600
            text_on_primary: Color::Rgb(16, 18, 20),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Styles
    // ══════════════════════════════════════════════════════════════════════

    pub fn background(&self) -> Style {
        Style::default().bg(self.colors.bg)
    }

    pub fn card(&self) -> Style {
        Style::default().bg(self.colors.bg_card).fg(self.colors.text)
    }

    pub fn card_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.primary)
        } else {
            Style::default().fg(self.colors.text_dim)
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn primary_word(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary_word(&self) -> Style {
        Style::default().fg(self.colors.text_muted)
    }

    pub fn separator(&self) -> Style {
        Style::default().fg(self.colors.accent)
    }

    pub fn image_placeholder(&self) -> Style {
        Style::default()
            .fg(self.colors.text_dim)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn button(&self, active: bool) -> Style {
        if active {
            Style::default()
                .bg(self.colors.primary)
                .fg(self.colors.text_on_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(self.colors.bg_button)
                .fg(self.colors.text)
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.colors.text_muted)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.colors.text_dim)
    }

    pub fn key_highlight(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Icons
// ══════════════════════════════════════════════════════════════════════════

pub mod icons {
    pub const DOUBLE_ARROW_RIGHT: &str = "»";
    pub const IMAGE: &str = "▣";
    pub const ELLIPSIS: &str = "…";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_flag_selects_palette() {
        assert_eq!(Theme::from_dark_mode(true).name, ThemeName::Dark);
        assert_eq!(Theme::from_dark_mode(false).name, ThemeName::Light);
        assert_eq!(Theme::default().name, ThemeName::Light);
    }

    #[test]
    fn next_toggles() {
        assert_eq!(ThemeName::Light.next(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.next(), ThemeName::Light);
        assert!(ThemeName::Dark.is_dark());
    }

    #[test]
    fn active_button_stands_out() {
        let theme = Theme::default();
        assert_ne!(theme.button(true), theme.button(false));
        assert!(theme.button(true).add_modifier.contains(Modifier::BOLD));
    }
}

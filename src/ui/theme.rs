//! Color theme definitions for the picker
//!
//! Defines colors and styles used throughout the interface.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named theme, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted suggestion
    pub selection_bg: Color,
    /// Foreground color for the highlighted suggestion
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Color for the selected person in the title
    pub title: Color,
    /// Color for the empty-result notice
    pub error: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            title: Color::White,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Create a light theme for bright terminal backgrounds
    #[must_use]
    pub const fn light() -> Self {
        Self {
            selection_bg: Color::LightBlue,
            selection_fg: Color::Black,
            cursor: Color::Blue,
            title: Color::Black,
            error: Color::Red,
            border: Color::Gray,
            dimmed: Color::Gray,
        }
    }

    /// Style for the highlighted suggestion
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for other suggestions
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the title when someone is selected
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the empty-result notice
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}

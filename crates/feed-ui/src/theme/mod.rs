//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Border color for the focused post
    pub focus_border: Color,
    /// Border color for other posts
    pub unfocus_border: Color,
    /// Accent for the header, buttons and author names
    pub accent: Color,
    /// Link lines
    pub link: Color,
    /// Secondary text (roles, timestamps, hints)
    pub muted: Color,
    /// Validation messages
    pub error: Color,
    /// Selected comment background
    pub selection: Color,
    /// Status bar background
    pub status_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Green,
            unfocus_border: Color::DarkGray,
            accent: Color::Rgb(0, 135, 95),
            link: Color::LightGreen,
            muted: Color::Gray,
            error: Color::Red,
            selection: Color::Rgb(41, 41, 46),
            status_bg: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Monochrome theme for terminals without color
    pub fn mono() -> Self {
        Self {
            focus_border: Color::White,
            unfocus_border: Color::DarkGray,
            accent: Color::White,
            link: Color::White,
            muted: Color::Gray,
            error: Color::White,
            selection: Color::DarkGray,
            status_bg: Color::DarkGray,
        }
    }

    /// Look up a theme by its configured name; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            "default" => Self::default(),
            other => {
                tracing::warn!("Unknown theme '{}', using default", other);
                Self::default()
            }
        }
    }
}

//! Theme Engine — light and dark palettes.

use crate::types::settings::{Palette, ThemeMode};

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> ThemeMode;
    fn palette(&self) -> &'static Palette;
    fn is_dark(&self) -> bool;
}

pub const LIGHT_PALETTE: Palette = Palette {
    primary: "#4c669f",
    secondary: "#3b5998",
    background: "#f5f5f5",
    surface: "#ffffff",
    text: "#333333",
    text_secondary: "#666666",
    accent: "#ff6b6b",
    border: "#dddddd",
    success: "#4CAF50",
    error: "#f44336",
};

pub const DARK_PALETTE: Palette = Palette {
    primary: "#7986cb",
    secondary: "#5c6bc0",
    background: "#121212",
    surface: "#1e1e1e",
    text: "#ffffff",
    text_secondary: "#b0b0b0",
    accent: "#ff4081",
    border: "#333333",
    success: "#81c784",
    error: "#e57373",
};

/// Tracks the active theme mode.
pub struct ThemeEngine {
    current_theme: ThemeMode,
}

impl ThemeEngine {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current_theme: mode,
        }
    }

    /// Initial mode taken from the platform color scheme.
    pub fn from_system(system_prefers_dark: bool) -> Self {
        Self::new(if system_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    fn palette(&self) -> &'static Palette {
        match self.current_theme {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }

    fn is_dark(&self) -> bool {
        self.current_theme == ThemeMode::Dark
    }
}

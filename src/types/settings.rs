use serde::{Deserialize, Serialize};

/// Color scheme of the application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Value stored under the `theme` preference key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a stored preference. Anything other than `"dark"` is light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Named colors for one theme.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

/// Selected top-level screen of the application shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Calc,
    Convert,
    Tip,
    History,
}

impl Tab {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Calc" => Some(Tab::Calc),
            "Convert" => Some(Tab::Convert),
            "Tip" => Some(Tab::Tip),
            "History" => Some(Tab::History),
            _ => None,
        }
    }
}

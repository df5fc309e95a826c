// pocketcalc Settings Engine
// Loads and saves the theme preference through the key-value store.
// The in-memory mode is authoritative; persistence failures are only logged.

use std::sync::Arc;

use async_trait::async_trait;

use crate::database::{KeyValueStore, THEME_KEY};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::settings::ThemeMode;

/// Trait defining the settings engine interface.
#[async_trait]
pub trait SettingsEngineTrait {
    async fn load_theme(&mut self) -> ThemeMode;
    async fn toggle_theme(&mut self) -> ThemeMode;
    fn theme(&self) -> ThemeMode;
    fn theme_engine(&self) -> &ThemeEngine;
}

/// Settings engine persisting the theme preference.
pub struct SettingsEngine {
    store: Arc<dyn KeyValueStore>,
    theme_engine: ThemeEngine,
}

impl SettingsEngine {
    /// Creates an engine whose initial theme follows the system color scheme.
    pub fn new(store: Arc<dyn KeyValueStore>, system_prefers_dark: bool) -> Self {
        Self {
            store,
            theme_engine: ThemeEngine::from_system(system_prefers_dark),
        }
    }
}

#[async_trait]
impl SettingsEngineTrait for SettingsEngine {
    /// Applies the saved theme, if any. An empty value counts as unset and
    /// read failures keep the current mode.
    async fn load_theme(&mut self) -> ThemeMode {
        match self.store.get(THEME_KEY).await {
            Ok(Some(saved)) if !saved.is_empty() => {
                self.theme_engine.set_theme(ThemeMode::from_stored(&saved));
            }
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "Error loading preferences"),
        }
        self.theme_engine.get_theme()
    }

    /// Flips the theme and persists the new value. Returns the new mode.
    async fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.theme_engine.get_theme().toggled();
        self.theme_engine.set_theme(mode);

        if let Err(e) = self.store.set(THEME_KEY, mode.as_str()).await {
            tracing::error!(error = %e, "Error saving theme preference");
        }
        mode
    }

    fn theme(&self) -> ThemeMode {
        self.theme_engine.get_theme()
    }

    fn theme_engine(&self) -> &ThemeEngine {
        &self.theme_engine
    }
}

//! App Core for pocketcalc.
//!
//! Central struct holding the application state and every component. Each
//! user action goes through a method here, which runs the computation,
//! reports failures to the notifier and records successes in history.

use std::sync::Arc;

use serde::Serialize;

use crate::config::AppConfig;
use crate::database::{KeyValueStore, SqliteStore};
use crate::managers::calculator_pad::{CalculatorPad, MemoryOperation};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::collaborators::{Notifier, ShareTarget, TracingNotifier, TracingShareTarget};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::tip_calculator::{self, DEFAULT_SPLIT_COUNT, DEFAULT_TIP_PERCENTAGE};
use crate::services::unit_converter::{UnitConverter, UnitConverterTrait};
use crate::types::conversion::{Conversion, ConversionType, ALL_CATEGORIES};
use crate::types::errors::{CalcError, ConversionError, HistoryError, TipError};
use crate::types::history::HistoryItem;
use crate::types::settings::{Tab, ThemeMode};
use crate::types::tip::TipBreakdown;

const CLEAR_HISTORY_TITLE: &str = "Clear History";
const CLEAR_HISTORY_MESSAGE: &str = "Are you sure you want to clear all history?";

/// Converter screen selection and input.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConverterState {
    pub from_unit: String,
    pub to_unit: String,
    pub selected_category: String,
    pub input: String,
}

/// Tip screen inputs and the last successful breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TipState {
    pub bill: String,
    pub tip_percentage: u32,
    pub split_count: u32,
    pub result: Option<TipBreakdown>,
}

impl Default for TipState {
    fn default() -> Self {
        Self {
            bill: String::new(),
            tip_percentage: DEFAULT_TIP_PERCENTAGE,
            split_count: DEFAULT_SPLIT_COUNT,
            result: None,
        }
    }
}

/// Central application struct.
pub struct App {
    pub history_manager: HistoryManager,
    pub settings_engine: SettingsEngine,
    pub pad: CalculatorPad,
    pub converter: UnitConverter,
    pub converter_state: ConverterState,
    pub tip_state: TipState,
    pub selected_tab: Tab,
    pub search_query: String,
    notifier: Box<dyn Notifier>,
    share_target: Box<dyn ShareTarget>,
}

impl App {
    /// Creates an App persisting to the SQLite database named by `config`,
    /// with logging-only collaborators.
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        config.ensure_data_dir()?;
        let store = SqliteStore::open(config.database_path())?;
        Ok(Self::with_collaborators(
            Arc::new(store),
            Box::new(TracingNotifier),
            Box::new(TracingShareTarget),
            config.system_prefers_dark,
        ))
    }

    /// Creates an App over any store, e.g. [`crate::database::MemoryStore`].
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_collaborators(
            store,
            Box::new(TracingNotifier),
            Box::new(TracingShareTarget),
            false,
        )
    }

    pub fn with_collaborators(
        store: Arc<dyn KeyValueStore>,
        notifier: Box<dyn Notifier>,
        share_target: Box<dyn ShareTarget>,
        system_prefers_dark: bool,
    ) -> Self {
        let converter = UnitConverter::new();
        let (from_unit, to_unit) = converter
            .default_conversion()
            .map(|c| (c.from.to_string(), c.to.to_string()))
            .unwrap_or_default();

        Self {
            history_manager: HistoryManager::new(Arc::clone(&store)),
            settings_engine: SettingsEngine::new(store, system_prefers_dark),
            pad: CalculatorPad::new(),
            converter,
            converter_state: ConverterState {
                from_unit,
                to_unit,
                selected_category: ALL_CATEGORIES.to_string(),
                input: String::new(),
            },
            tip_state: TipState::default(),
            selected_tab: Tab::default(),
            search_query: String::new(),
            notifier,
            share_target,
        }
    }

    /// Startup sequence: load the theme preference, then the history log.
    pub async fn startup(&mut self) {
        self.settings_engine.load_theme().await;
        self.history_manager.load().await;
    }

    // ─── Calculator ───

    /// Evaluates the pad input. On success the calculation is recorded;
    /// on failure the user is alerted and history is untouched.
    pub async fn calculate(&mut self) -> Result<String, CalcError> {
        let expression = self.pad.input().to_string();
        match self.pad.evaluate() {
            Ok(result) => {
                self.history_manager
                    .append(HistoryItem::calculation(&expression, &result))
                    .await;
                Ok(result)
            }
            Err(e) => {
                tracing::debug!(error = %e, expression = %expression, "evaluation failed");
                self.notifier.alert("Error", "Invalid expression");
                Err(e)
            }
        }
    }

    pub fn memory(&mut self, operation: MemoryOperation) {
        self.pad.apply_memory(operation);
    }

    // ─── Converter ───

    /// Selects a category and returns the conversions it shows.
    pub fn select_category(&mut self, category: &str) -> Vec<&ConversionType> {
        self.converter_state.selected_category = category.to_string();
        self.converter.filter_by_category(category)
    }

    pub fn visible_conversions(&self) -> Vec<&ConversionType> {
        self.converter
            .filter_by_category(&self.converter_state.selected_category)
    }

    pub fn select_units(&mut self, from: &str, to: &str) {
        self.converter_state.from_unit = from.to_string();
        self.converter_state.to_unit = to.to_string();
    }

    pub fn set_conversion_input(&mut self, input: &str) {
        self.converter_state.input = input.to_string();
    }

    /// Converts the current input across the selected unit pair. On success
    /// the input is replaced with the converted value.
    pub async fn convert(&mut self) -> Result<Conversion, ConversionError> {
        let state = &self.converter_state;
        match self
            .converter
            .convert(&state.input, &state.from_unit, &state.to_unit)
        {
            Ok(conversion) => {
                self.history_manager
                    .append(HistoryItem::conversion(
                        conversion.summary.clone(),
                        conversion.category,
                    ))
                    .await;
                self.converter_state.input = conversion.formatted.clone();
                Ok(conversion)
            }
            Err(e) => {
                self.notifier.alert("Error", e.user_message());
                Err(e)
            }
        }
    }

    // ─── Tip ───

    pub fn set_bill(&mut self, bill: &str) {
        self.tip_state.bill = bill.to_string();
    }

    pub fn set_tip_percentage(&mut self, percentage: u32) {
        self.tip_state.tip_percentage = percentage;
    }

    pub fn set_split_count(&mut self, count: u32) {
        self.tip_state.split_count = count;
    }

    /// Computes the tip from the current inputs. A failure clears the
    /// previous breakdown.
    pub async fn calculate_tip(&mut self) -> Result<TipBreakdown, TipError> {
        let state = &self.tip_state;
        match tip_calculator::calculate(&state.bill, state.tip_percentage, state.split_count) {
            Ok(breakdown) => {
                self.tip_state.result = Some(breakdown.clone());
                self.history_manager
                    .append(HistoryItem::tip(breakdown.summary()))
                    .await;
                Ok(breakdown)
            }
            Err(e) => {
                self.tip_state.result = None;
                self.notifier.alert("Error", e.user_message());
                Err(e)
            }
        }
    }

    // ─── History ───

    /// History filtered by the current search query.
    pub fn filtered_history(&self) -> Vec<&HistoryItem> {
        self.history_manager.search(&self.search_query)
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Asks for confirmation, then clears history. Returns whether it was cleared.
    pub async fn clear_history(&mut self) -> bool {
        if !self
            .notifier
            .confirm(CLEAR_HISTORY_TITLE, CLEAR_HISTORY_MESSAGE)
            .await
        {
            return false;
        }
        self.history_manager.clear_all().await;
        true
    }

    pub async fn delete_history_entry(&mut self, id: &str) -> Result<(), HistoryError> {
        self.history_manager.delete_entry(id).await
    }

    /// Shares the entry with the given id. Share failures are swallowed.
    pub async fn share_history_entry(&self, id: &str) -> Result<(), HistoryError> {
        let item = self
            .history_manager
            .get(id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;
        self.history_manager
            .share(item, self.share_target.as_ref())
            .await;
        Ok(())
    }

    // ─── Shell ───

    pub async fn toggle_theme(&mut self) -> ThemeMode {
        self.settings_engine.toggle_theme().await
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
    }
}

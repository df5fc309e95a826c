//! Command handler for the pocketcalc UI bridge.
//!
//! The UI host sends `(method, params)` pairs; `handle_method` dispatches
//! them to the `App` and returns a JSON value or an error message.

use tokio::sync::Mutex;

use crate::app::App;
use crate::managers::calculator_pad::MemoryOperation;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::services::unit_converter::UnitConverterTrait;
use crate::types::settings::Tab;

use serde_json::{json, Value};

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

fn u32_param(params: &Value, name: &str) -> Result<Option<u32>, String> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| format!("invalid {}", name)),
    }
}

fn pad_state(app: &App) -> Value {
    json!({
        "input": app.pad.input(),
        "result": app.pad.result(),
        "last_key": app.pad.last_key(),
        "memory": app.pad.memory(),
    })
}

/// Dispatch a UI command to the application.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Calculator ───
        "calc.press" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let mut a = app.lock().await;
            a.pad.press(key);
            Ok(pad_state(&a))
        }
        "calc.clear" => {
            let mut a = app.lock().await;
            a.pad.clear();
            Ok(pad_state(&a))
        }
        "calc.backspace" => {
            let mut a = app.lock().await;
            a.pad.backspace();
            Ok(pad_state(&a))
        }
        "calc.evaluate" => {
            let mut a = app.lock().await;
            if let Some(expression) = str_param(params, "expression") {
                a.pad.clear();
                a.pad.press(expression);
            }
            let result = a.calculate().await.map_err(|e| format!("Invalid expression: {}", e))?;
            Ok(json!({"result": result}))
        }
        "calc.state" => {
            let a = app.lock().await;
            Ok(pad_state(&a))
        }

        // ─── Memory ───
        "memory.clear" | "memory.recall" | "memory.add" | "memory.subtract" => {
            let op = method.trim_start_matches("memory.");
            let operation = MemoryOperation::parse(op).ok_or("unknown memory operation")?;
            let mut a = app.lock().await;
            a.memory(operation);
            Ok(pad_state(&a))
        }

        // ─── Converter ───
        "convert.categories" => {
            let a = app.lock().await;
            Ok(json!(a.converter.categories()))
        }
        "convert.list" => {
            let mut a = app.lock().await;
            let conversions = match str_param(params, "category") {
                Some(category) => a.select_category(category),
                None => a.visible_conversions(),
            };
            serde_json::to_value(conversions).map_err(|e| e.to_string())
        }
        "convert.select" => {
            let from = str_param(params, "from").ok_or("missing from")?;
            let to = str_param(params, "to").ok_or("missing to")?;
            let mut a = app.lock().await;
            a.select_units(from, to);
            serde_json::to_value(&a.converter_state).map_err(|e| e.to_string())
        }
        "convert.run" => {
            let mut a = app.lock().await;
            if let Some(value) = str_param(params, "value") {
                a.set_conversion_input(value);
            }
            if let (Some(from), Some(to)) = (str_param(params, "from"), str_param(params, "to")) {
                a.select_units(from, to);
            }
            let conversion = a.convert().await.map_err(|e| e.to_string())?;
            serde_json::to_value(conversion).map_err(|e| e.to_string())
        }

        // ─── Tip ───
        "tip.calculate" => {
            let percentage = u32_param(params, "tip_percentage")?;
            let split = u32_param(params, "split_count")?;
            let mut a = app.lock().await;
            if let Some(bill) = str_param(params, "bill") {
                a.set_bill(bill);
            }
            if let Some(p) = percentage {
                a.set_tip_percentage(p);
            }
            if let Some(s) = split {
                a.set_split_count(s);
            }
            let breakdown = a.calculate_tip().await.map_err(|e| e.to_string())?;
            Ok(json!({
                "tip": breakdown.tip,
                "total": breakdown.total,
                "per_person": breakdown.per_person,
                "summary": breakdown.summary(),
            }))
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().await;
            serde_json::to_value(a.history_manager.list()).map_err(|e| e.to_string())
        }
        "history.search" => {
            let query = str_param(params, "query").ok_or("missing query")?;
            let mut a = app.lock().await;
            a.set_search_query(query);
            serde_json::to_value(a.filtered_history()).map_err(|e| e.to_string())
        }
        "history.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().await;
            a.delete_history_entry(id).await.map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.clear" => {
            let mut a = app.lock().await;
            let cleared = a.clear_history().await;
            Ok(json!({"cleared": cleared}))
        }
        "history.share" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let a = app.lock().await;
            a.share_history_entry(id).await.map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Shell ───
        "theme.get" => {
            let a = app.lock().await;
            let engine = a.settings_engine.theme_engine();
            Ok(json!({"theme": engine.get_theme(), "palette": engine.palette()}))
        }
        "theme.toggle" => {
            let mut a = app.lock().await;
            let mode = a.toggle_theme().await;
            Ok(json!({"theme": mode}))
        }
        "tab.select" => {
            let name = str_param(params, "tab").ok_or("missing tab")?;
            let tab = Tab::parse(name).ok_or_else(|| format!("unknown tab: {}", name))?;
            let mut a = app.lock().await;
            a.select_tab(tab);
            Ok(json!({"tab": tab}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

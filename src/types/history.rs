use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What produced a history entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Calculation,
    Conversion,
    Tip,
}

/// A single entry in the calculation history log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    pub result: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl HistoryItem {
    /// A calculation entry; `expression` is the input as typed.
    pub fn calculation(expression: &str, result: &str) -> Self {
        Self::new(
            HistoryKind::Calculation,
            Some(expression.to_string()),
            result.to_string(),
            Some("Basic".to_string()),
        )
    }

    /// A conversion entry with a pre-formatted result line.
    pub fn conversion(result: String, category: &str) -> Self {
        Self::new(
            HistoryKind::Conversion,
            None,
            result,
            Some(category.to_string()),
        )
    }

    /// A tip entry with a pre-formatted summary line.
    pub fn tip(result: String) -> Self {
        Self::new(HistoryKind::Tip, None, result, Some("Tip".to_string()))
    }

    fn new(
        kind: HistoryKind,
        expression: Option<String>,
        result: String,
        category: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            expression,
            result,
            timestamp: chrono::Utc::now().timestamp_millis(),
            category,
        }
    }

    /// Plain-text rendering used for display and sharing.
    pub fn display_text(&self) -> String {
        match (&self.kind, &self.expression) {
            (HistoryKind::Calculation, Some(expr)) => format!("{} = {}", expr, self.result),
            _ => self.result.clone(),
        }
    }

    /// Case-insensitive match of an already lowercased needle against
    /// `result` and `expression`.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.result.to_lowercase().contains(needle_lower)
            || self
                .expression
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(needle_lower))
    }
}

//! Calculator Pad — keypad input buffer, last result and memory register.

use serde::Serialize;

use crate::services::expression_evaluator::{self, ERROR_SENTINEL};
use crate::types::errors::CalcError;

const OPERATOR_KEYS: [&str; 4] = ["/", "*", "-", "+"];

/// Memory register operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOperation {
    /// MC: reset memory to zero.
    Clear,
    /// MR: copy memory into the input.
    Recall,
    /// M+: add the displayed value.
    Add,
    /// M-: subtract the displayed value.
    Subtract,
}

impl MemoryOperation {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "MC" | "clear" => Some(MemoryOperation::Clear),
            "MR" | "recall" => Some(MemoryOperation::Recall),
            "M+" | "add" => Some(MemoryOperation::Add),
            "M-" | "subtract" => Some(MemoryOperation::Subtract),
            _ => None,
        }
    }
}

/// Snapshot of the calculator display.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CalculatorPad {
    input: String,
    result: String,
    last_key: String,
    memory: f64,
}

impl CalculatorPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Formatted result, `"Error"` after a failed evaluation, or empty.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn last_key(&self) -> &str {
        &self.last_key
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Handles a keypad press.
    ///
    /// While a result is showing, a non-operator key starts a new input.
    pub fn press(&mut self, key: &str) {
        if !self.result.is_empty() && !OPERATOR_KEYS.contains(&key) {
            self.input = key.to_string();
            self.result.clear();
        } else {
            self.input.push_str(key);
        }
        self.last_key = key.to_string();
    }

    /// Resets input and result. Memory is kept.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result.clear();
        self.last_key.clear();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Evaluates the current input and stores the formatted result or the
    /// error sentinel.
    pub fn evaluate(&mut self) -> Result<String, CalcError> {
        match expression_evaluator::evaluate_formatted(&self.input) {
            Ok(formatted) => {
                self.result = formatted.clone();
                Ok(formatted)
            }
            Err(e) => {
                self.result = ERROR_SENTINEL.to_string();
                Err(e)
            }
        }
    }

    pub fn apply_memory(&mut self, operation: MemoryOperation) {
        match operation {
            MemoryOperation::Clear => self.memory = 0.0,
            MemoryOperation::Recall => self.input = format!("{}", self.memory),
            MemoryOperation::Add => {
                if let Some(value) = self.displayed_value() {
                    self.memory += value;
                }
            }
            MemoryOperation::Subtract => {
                if let Some(value) = self.displayed_value() {
                    self.memory -= value;
                }
            }
        }
    }

    /// Leading number of the result if one is showing, else of the input.
    fn displayed_value(&self) -> Option<f64> {
        let source = if self.result.is_empty() {
            &self.input
        } else {
            &self.result
        };
        leading_number(source)
    }
}

/// Parses the longest numeric prefix of `text` (`"12+3"` gives 12).
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        digit_count += fraction_end - fraction_start;
        end = fraction_end;
    }

    if digit_count == 0 {
        return None;
    }
    text[..end].parse().ok()
}

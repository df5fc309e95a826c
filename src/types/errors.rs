use thiserror::Error;

// === CalcError ===

/// Errors produced while evaluating an arithmetic expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Nothing left to evaluate after sanitizing the input.
    #[error("Empty expression")]
    Empty,
    /// A number token could not be parsed (e.g. `1.2.3` or a lone `.`).
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    /// A token appeared where the grammar does not allow it.
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    /// The expression ended while an operand or `)` was still expected.
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    /// A `(` was never closed.
    #[error("Expected ')' after expression")]
    UnclosedParen,
    /// Parentheses or unary signs nested beyond the parser's limit.
    #[error("Expression nested too deeply")]
    TooDeep,
    /// The result is infinite or NaN, typically from a division by zero.
    #[error("Result is not a finite number")]
    NonFinite,
}

// === ConversionError ===

/// Errors related to unit conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The input value is not a finite number.
    #[error("Invalid conversion input: {0}")]
    InvalidInput(String),
    /// No catalog entry matches the unit pair.
    #[error("Conversion type not found: {from} -> {to}")]
    NotFound { from: String, to: String },
}

impl ConversionError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConversionError::InvalidInput(_) => "Please enter a valid number",
            ConversionError::NotFound { .. } => "Conversion type not found",
        }
    }
}

// === TipError ===

/// Errors related to tip calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TipError {
    /// The bill amount is not a finite number.
    #[error("Invalid bill amount: {0}")]
    InvalidBill(String),
    /// Tip percentage outside [0, 30].
    #[error("Tip percentage out of range: {0}")]
    PercentageOutOfRange(u32),
    /// Split count outside [1, 20].
    #[error("Split count out of range: {0}")]
    SplitOutOfRange(u32),
}

impl TipError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            TipError::InvalidBill(_) => "Please enter a valid bill amount",
            TipError::PercentageOutOfRange(_) => "Tip percentage must be between 0 and 30",
            TipError::SplitOutOfRange(_) => "Split count must be between 1 and 20",
        }
    }
}

// === StorageError ===

/// Errors raised by a key-value persistence adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing database failed.
    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// The blocking worker running the query did not complete.
    #[error("Storage task failed: {0}")]
    Task(String),
    /// The adapter is unavailable (e.g. a poisoned lock or a disabled backend).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// === HistoryError ===

/// Errors related to calculation history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// History entry with the given ID was not found.
    #[error("History entry not found: {0}")]
    NotFound(String),
    /// Failed to serialize or deserialize the history log.
    #[error("History serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The persistence adapter failed.
    #[error("History storage error: {0}")]
    Storage(#[from] StorageError),
}

// === ShareError ===

/// Errors reported by the sharing collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    #[error("Share cancelled")]
    Cancelled,
    /// The platform share facility failed.
    #[error("Share failed: {0}")]
    Failed(String),
}

// === ConfigError ===

/// Errors related to application configuration and logging setup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    LoggingInitialized(String),
    /// Failed to create the data directory.
    #[error("Failed to prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),
}

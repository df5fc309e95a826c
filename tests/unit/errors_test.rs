use pocketcalc::types::errors::*;

// === CalcError Tests ===

#[test]
fn calc_error_display_variants() {
    assert_eq!(CalcError::Empty.to_string(), "Empty expression");
    assert_eq!(
        CalcError::InvalidNumber("1.2.3".to_string()).to_string(),
        "Invalid number: 1.2.3"
    );
    assert_eq!(
        CalcError::UnexpectedToken(")".to_string()).to_string(),
        "Unexpected token: )"
    );
    assert_eq!(CalcError::UnexpectedEnd.to_string(), "Unexpected end of expression");
    assert_eq!(CalcError::UnclosedParen.to_string(), "Expected ')' after expression");
    assert_eq!(CalcError::NonFinite.to_string(), "Result is not a finite number");
}

#[test]
fn calc_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(CalcError::Empty);
    assert!(err.source().is_none());
}

// === ConversionError Tests ===

#[test]
fn conversion_error_display_and_user_message() {
    let not_found = ConversionError::NotFound {
        from: "ft".to_string(),
        to: "m".to_string(),
    };
    assert_eq!(not_found.to_string(), "Conversion type not found: ft -> m");
    assert_eq!(not_found.user_message(), "Conversion type not found");

    let invalid = ConversionError::InvalidInput("abc".to_string());
    assert_eq!(invalid.user_message(), "Please enter a valid number");
}

// === TipError Tests ===

#[test]
fn tip_error_user_messages() {
    assert_eq!(
        TipError::InvalidBill("x".to_string()).user_message(),
        "Please enter a valid bill amount"
    );
    assert_eq!(
        TipError::PercentageOutOfRange(40).to_string(),
        "Tip percentage out of range: 40"
    );
    assert_eq!(TipError::SplitOutOfRange(0).to_string(), "Split count out of range: 0");
}

// === HistoryError Tests ===

#[test]
fn history_error_wraps_sources() {
    let err = HistoryError::NotFound("abc".to_string());
    assert_eq!(err.to_string(), "History entry not found: abc");

    let json_err = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
    let err: HistoryError = json_err.into();
    assert!(err.to_string().starts_with("History serialization error:"));

    let err: HistoryError = StorageError::Unavailable("offline".to_string()).into();
    assert_eq!(
        err.to_string(),
        "History storage error: Storage unavailable: offline"
    );
}

// === ShareError Tests ===

#[test]
fn share_error_display() {
    assert_eq!(ShareError::Cancelled.to_string(), "Share cancelled");
    assert_eq!(
        ShareError::Failed("no target".to_string()).to_string(),
        "Share failed: no target"
    );
}

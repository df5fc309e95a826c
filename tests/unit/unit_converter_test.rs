use pocketcalc::services::unit_converter::{UnitConverter, UnitConverterTrait};
use pocketcalc::types::conversion::{ConversionType, CONVERSION_TYPES};
use pocketcalc::types::errors::ConversionError;
use rstest::rstest;

// === Conversion Tests ===

#[rstest]
#[case("10", "m", "ft", "32.81")]
#[case("5", "km", "mi", "3.11")]
#[case("2", "kg", "lb", "4.41")]
#[case("100", "°C", "°F", "180.00")]
#[case("3.5", "L", "gal", "0.92")]
#[case("100", "km/h", "mph", "62.14")]
#[case("10", "cm²", "in²", "1.55")]
#[case("500", "g", "oz", "17.64")]
#[case("0", "m", "ft", "0.00")]
#[case("-1", "m", "ft", "-3.28")]
fn converts_catalog_entries(
    #[case] input: &str,
    #[case] from: &str,
    #[case] to: &str,
    #[case] expected: &str,
) {
    let converter = UnitConverter::new();
    assert_eq!(converter.convert(input, from, to).unwrap().formatted, expected);
}

#[test]
fn summary_uses_trimmed_input_and_units() {
    let converter = UnitConverter::new();
    let conversion = converter.convert(" 10 ", "km/h", "mph").unwrap();
    assert_eq!(conversion.summary, "10km/h = 6.21mph");
    assert_eq!(conversion.category, "Speed");
    assert_eq!(conversion.value, 6.21);
}

#[test]
fn celsius_is_a_pure_multiplier() {
    let converter = UnitConverter::new();
    assert_eq!(converter.convert("0", "°C", "°F").unwrap().formatted, "0.00");
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("1e400")]
#[case("NaN")]
fn rejects_invalid_input(#[case] input: &str) {
    let converter = UnitConverter::new();
    let err = converter.convert(input, "m", "ft").unwrap_err();
    assert_eq!(err, ConversionError::InvalidInput(input.to_string()));
}

#[test]
fn overflowing_result_is_rejected() {
    let converter = UnitConverter::new();
    let err = converter.convert("1e307", "m", "ft").unwrap_err();
    assert_eq!(err, ConversionError::InvalidInput("1e307".to_string()));
}

#[test]
fn unknown_pair_is_not_found() {
    let converter = UnitConverter::new();
    let err = converter.convert("1", "mi", "km").unwrap_err();
    assert_eq!(
        err,
        ConversionError::NotFound {
            from: "mi".to_string(),
            to: "km".to_string()
        }
    );
}

// === Catalog Tests ===

#[test]
fn filter_all_returns_full_catalog_in_order() {
    let converter = UnitConverter::new();
    let all = converter.filter_by_category("All");
    assert_eq!(all.len(), CONVERSION_TYPES.len());
    assert_eq!(all[0].label, "Meters to Feet");
}

#[test]
fn filter_by_weight_keeps_catalog_order() {
    let converter = UnitConverter::new();
    let labels: Vec<&str> = converter
        .filter_by_category("Weight")
        .iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, vec!["Kilograms to Pounds", "Grams to Ounces"]);
}

#[test]
fn filter_unknown_category_is_empty() {
    let converter = UnitConverter::new();
    assert!(converter.filter_by_category("Time").is_empty());
}

#[test]
fn custom_catalog() {
    static CATALOG: &[ConversionType] = &[ConversionType {
        from: "h",
        to: "min",
        label: "Hours to Minutes",
        multiplier: 60.0,
        category: "Time",
    }];
    let converter = UnitConverter::with_catalog(CATALOG);
    assert_eq!(converter.categories(), vec!["All", "Time"]);
    assert_eq!(converter.convert("1.5", "h", "min").unwrap().formatted, "90.00");
    assert_eq!(converter.default_conversion().map(|c| c.from), Some("h"));
}

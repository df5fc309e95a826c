use serde::Serialize;

/// One fixed-direction unit conversion: `to = from * multiplier`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ConversionType {
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
    pub category: &'static str,
}

/// Synthetic category that matches every catalog entry.
pub const ALL_CATEGORIES: &str = "All";

/// Built-in conversion catalog.
pub const CONVERSION_TYPES: &[ConversionType] = &[
    ConversionType { from: "m", to: "ft", label: "Meters to Feet", multiplier: 3.28084, category: "Length" },
    ConversionType { from: "km", to: "mi", label: "Kilometers to Miles", multiplier: 0.621371, category: "Length" },
    ConversionType { from: "kg", to: "lb", label: "Kilograms to Pounds", multiplier: 2.20462, category: "Weight" },
    ConversionType { from: "°C", to: "°F", label: "Celsius to Fahrenheit", multiplier: 1.8, category: "Temperature" },
    ConversionType { from: "L", to: "gal", label: "Liters to Gallons", multiplier: 0.264172, category: "Volume" },
    ConversionType { from: "km/h", to: "mph", label: "KM/H to MPH", multiplier: 0.621371, category: "Speed" },
    ConversionType { from: "cm²", to: "in²", label: "Sq Centimeters to Sq Inches", multiplier: 0.155, category: "Area" },
    ConversionType { from: "g", to: "oz", label: "Grams to Ounces", multiplier: 0.035274, category: "Weight" },
];

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Conversion {
    /// Converted value rounded to two decimals.
    pub value: f64,
    /// The value as displayed, always with two decimals.
    pub formatted: String,
    /// Full line, e.g. `10m = 32.81ft`.
    pub summary: String,
    pub category: &'static str,
}

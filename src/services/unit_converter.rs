//! Unit Converter — catalog lookup and linear conversion.

use crate::services::number_format::round2;
use crate::types::conversion::{Conversion, ConversionType, ALL_CATEGORIES, CONVERSION_TYPES};
use crate::types::errors::ConversionError;

/// Trait defining the unit converter interface.
pub trait UnitConverterTrait {
    fn convert(&self, input: &str, from: &str, to: &str) -> Result<Conversion, ConversionError>;
    fn find(&self, from: &str, to: &str) -> Option<&ConversionType>;
    fn categories(&self) -> Vec<&'static str>;
    fn filter_by_category(&self, category: &str) -> Vec<&ConversionType>;
}

/// Converter over a fixed catalog of one-directional conversions.
pub struct UnitConverter {
    catalog: &'static [ConversionType],
}

impl UnitConverter {
    /// Creates a converter over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(CONVERSION_TYPES)
    }

    pub fn with_catalog(catalog: &'static [ConversionType]) -> Self {
        Self { catalog }
    }

    /// First catalog entry; the converter screen's initial selection.
    pub fn default_conversion(&self) -> Option<&ConversionType> {
        self.catalog.first()
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverterTrait for UnitConverter {
    /// Converts `input` across the `(from, to)` pair.
    ///
    /// The input is validated before the lookup, so a bad number is reported
    /// even for an unknown pair. A result that overflows is reported as
    /// invalid input.
    fn convert(&self, input: &str, from: &str, to: &str) -> Result<Conversion, ConversionError> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| ConversionError::InvalidInput(input.to_string()))?;

        let entry = self.find(from, to).ok_or_else(|| ConversionError::NotFound {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        let product = value * entry.multiplier;
        if !product.is_finite() {
            return Err(ConversionError::InvalidInput(input.to_string()));
        }
        let converted = round2(product);
        let formatted = format!("{:.2}", converted);

        Ok(Conversion {
            value: converted,
            summary: format!("{}{} = {}{}", trimmed, entry.from, formatted, entry.to),
            formatted,
            category: entry.category,
        })
    }

    fn find(&self, from: &str, to: &str) -> Option<&ConversionType> {
        self.catalog.iter().find(|c| c.from == from && c.to == to)
    }

    /// `"All"` followed by each catalog category in first-seen order.
    fn categories(&self) -> Vec<&'static str> {
        let mut categories = vec![ALL_CATEGORIES];
        for entry in self.catalog {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }
        categories
    }

    fn filter_by_category(&self, category: &str) -> Vec<&ConversionType> {
        self.catalog
            .iter()
            .filter(|c| category == ALL_CATEGORIES || c.category == category)
            .collect()
    }
}

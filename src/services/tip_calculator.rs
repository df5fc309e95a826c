//! Tip Calculator — tip, total and per-person share of a bill.

use std::ops::RangeInclusive;

use crate::types::errors::TipError;
use crate::types::tip::TipBreakdown;

/// Allowed tip percentages.
pub const TIP_PERCENTAGE_RANGE: RangeInclusive<u32> = 0..=30;
/// Allowed number of people splitting the bill.
pub const SPLIT_COUNT_RANGE: RangeInclusive<u32> = 1..=20;
/// Slider position when the tip screen opens.
pub const DEFAULT_TIP_PERCENTAGE: u32 = 15;
pub const DEFAULT_SPLIT_COUNT: u32 = 1;

/// Computes the breakdown for `bill` (as typed) at `tip_percentage` split
/// `split_count` ways.
///
/// # Errors
/// `InvalidBill` when `bill` is not a finite number or the total overflows; range errors when the
/// percentage or split count fall outside their slider domains.
pub fn calculate(bill: &str, tip_percentage: u32, split_count: u32) -> Result<TipBreakdown, TipError> {
    let bill_value: f64 = bill
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| TipError::InvalidBill(bill.to_string()))?;

    if !TIP_PERCENTAGE_RANGE.contains(&tip_percentage) {
        return Err(TipError::PercentageOutOfRange(tip_percentage));
    }
    if !SPLIT_COUNT_RANGE.contains(&split_count) {
        return Err(TipError::SplitOutOfRange(split_count));
    }

    let tip = bill_value * f64::from(tip_percentage) / 100.0;
    let total = bill_value + tip;
    if !total.is_finite() {
        return Err(TipError::InvalidBill(bill.to_string()));
    }
    let per_person = total / f64::from(split_count);

    Ok(TipBreakdown {
        bill: bill_value,
        tip,
        total,
        per_person,
        tip_percentage,
        split_count,
    })
}

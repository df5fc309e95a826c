use serde::{Deserialize, Serialize};

use crate::services::number_format::to_fixed;

/// Result of splitting a bill. Amounts keep full precision; rounding happens
/// only in [`TipBreakdown::summary`], ties away from zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipBreakdown {
    pub bill: f64,
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
    pub tip_percentage: u32,
    pub split_count: u32,
}

impl TipBreakdown {
    /// History line, e.g.
    /// `Bill: $100.00, Tip: $20.00 (20%), Total: $120.00, Per Person: $30.00`.
    pub fn summary(&self) -> String {
        format!(
            "Bill: ${}, Tip: ${} ({}%), Total: ${}, Per Person: ${}",
            to_fixed(self.bill, 2),
            to_fixed(self.tip, 2),
            self.tip_percentage,
            to_fixed(self.total, 2),
            to_fixed(self.per_person, 2)
        )
    }
}

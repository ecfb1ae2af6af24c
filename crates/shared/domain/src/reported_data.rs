//! Reported values: one numeric observation of one indicator within one report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{VALUE_PRECISION, VALUE_SCALE};
use crate::error::{DomainError, DomainResult};

/// Stored observation. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedValue {
    pub id: i64,
    pub report_id: i32,
    pub indicator_id: i32,
    pub indicator_value: Decimal,
}

/// Reported value creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewReportedValue {
    pub report_id: i32,
    pub indicator_id: i32,
    pub indicator_value: Decimal,
}

impl NewReportedValue {
    pub fn new(report_id: i32, indicator_id: i32, indicator_value: Decimal) -> Self {
        Self {
            report_id,
            indicator_id,
            indicator_value,
        }
    }

    /// Check that the value fits `DECIMAL(20, 4)` without rounding.
    pub fn validate(&self) -> DomainResult<()> {
        let value = self.indicator_value.normalize();
        if value.scale() > VALUE_SCALE {
            return Err(DomainError::validation(format!(
                "Value {} has more than {} fractional digits",
                self.indicator_value, VALUE_SCALE
            )));
        }

        let integer_digits = VALUE_PRECISION - VALUE_SCALE;
        let limit = Decimal::from_i128_with_scale(10_i128.pow(integer_digits), 0);
        if value.abs() >= limit {
            return Err(DomainError::validation(format!(
                "Value {} exceeds {} integer digits",
                self.indicator_value, integer_digits
            )));
        }
        Ok(())
    }
}

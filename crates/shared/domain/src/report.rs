//! Financial report metadata.
//!
//! A report is one disclosure document for one bank covering one fiscal
//! period. A bank has at most one report per `(year, period)`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY, MAX_REPORT_YEAR, MAX_SOURCE_URL_LENGTH, MIN_REPORT_YEAR, PERIOD_FY,
    PERIOD_H1, PERIOD_Q1, PERIOD_Q3, VALID_PERIOD_TYPES,
};
use crate::error::{require_text, DomainError, DomainResult};

/// Fiscal period covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeriodType {
    /// First quarter
    #[serde(rename = "Q1")]
    FirstQuarter,
    /// Half year
    #[serde(rename = "H1")]
    HalfYear,
    /// First three quarters
    #[serde(rename = "Q3")]
    ThreeQuarters,
    /// Full year
    #[serde(rename = "FY")]
    FullYear,
}

impl PeriodType {
    /// All period types in calendar order.
    pub const ALL: [PeriodType; 4] = [
        PeriodType::FirstQuarter,
        PeriodType::HalfYear,
        PeriodType::ThreeQuarters,
        PeriodType::FullYear,
    ];

    /// Storage code of this period type.
    pub fn code(&self) -> &'static str {
        match self {
            PeriodType::FirstQuarter => PERIOD_Q1,
            PeriodType::HalfYear => PERIOD_H1,
            PeriodType::ThreeQuarters => PERIOD_Q3,
            PeriodType::FullYear => PERIOD_FY,
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PeriodType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            PERIOD_Q1 => Ok(PeriodType::FirstQuarter),
            PERIOD_H1 => Ok(PeriodType::HalfYear),
            PERIOD_Q3 => Ok(PeriodType::ThreeQuarters),
            PERIOD_FY => Ok(PeriodType::FullYear),
            _ => Err(DomainError::validation(format!(
                "Invalid period type '{}': expected one of {}",
                s,
                VALID_PERIOD_TYPES.join(", ")
            ))),
        }
    }
}

/// Report domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub id: i32,
    pub bank_id: i32,
    pub report_year: i32,
    pub period_type: PeriodType,
    /// Publication date of the disclosure
    pub report_date: NaiveDate,
    pub source_url: Option<String>,
    pub currency: String,
}

/// Report creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewReport {
    pub bank_id: i32,
    pub report_year: i32,
    pub period_type: PeriodType,
    pub report_date: NaiveDate,
    pub source_url: Option<String>,
    pub currency: String,
}

impl NewReport {
    /// Report in the default currency with no source URL.
    pub fn new(bank_id: i32, report_year: i32, period_type: PeriodType, report_date: NaiveDate) -> Self {
        Self {
            bank_id,
            report_year,
            period_type,
            report_date,
            source_url: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Check year range, currency code and source URL length.
    pub fn validate(&self) -> DomainResult<()> {
        validate_year(self.report_year)?;
        validate_currency(&self.currency)?;
        if let Some(url) = &self.source_url {
            require_text("Source URL", url, MAX_SOURCE_URL_LENGTH)?;
        }
        Ok(())
    }
}

/// Metadata correction applied to an existing report.
///
/// Only the publication date and source URL can change after ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportCorrection {
    pub report_date: Option<NaiveDate>,
    pub source_url: Option<String>,
}

impl ReportCorrection {
    pub fn is_empty(&self) -> bool {
        self.report_date.is_none() && self.source_url.is_none()
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.is_empty() {
            return Err(DomainError::validation("Correction must change at least one field"));
        }
        if let Some(url) = &self.source_url {
            require_text("Source URL", url, MAX_SOURCE_URL_LENGTH)?;
        }
        Ok(())
    }
}

fn validate_year(year: i32) -> DomainResult<()> {
    if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
        return Err(DomainError::validation(format!(
            "Report year {} is outside {}..={}",
            year, MIN_REPORT_YEAR, MAX_REPORT_YEAR
        )));
    }
    Ok(())
}

fn validate_currency(currency: &str) -> DomainResult<()> {
    if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(DomainError::validation(format!(
            "Invalid currency code '{}': expected three upper-case letters",
            currency
        )));
    }
    Ok(())
}

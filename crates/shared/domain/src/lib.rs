//! Domain layer - Core entities and value objects of the report store.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! banks, indicator definitions, financial reports and reported values,
//! together with the validation rules applied before anything reaches storage.

pub mod bank;
pub mod constants;
pub mod error;
pub mod indicator;
pub mod report;
pub mod reported_data;
pub mod stock_code;

pub use bank::{Bank, NewBank};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use indicator::{FinancialIndicator, NewIndicator};
pub use report::{FinancialReport, NewReport, PeriodType, ReportCorrection};
pub use reported_data::{NewReportedValue, ReportedValue};
pub use stock_code::StockCode;

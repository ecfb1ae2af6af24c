//! Service layer - input validation and use cases on top of the repositories.

mod bank_service;
mod indicator_service;
mod report_service;

pub use bank_service::{BankManager, BankService, SeedSummary};
pub use indicator_service::{IndicatorManager, IndicatorService};
pub use report_service::{ReportManager, ReportService};

//! Repository layer for data access.

pub mod entities;
mod bank_repository;
mod indicator_repository;
mod report_repository;
mod reported_data_repository;

pub use bank_repository::{BankRepository, BankStore};
pub use indicator_repository::{IndicatorRepository, IndicatorStore};
pub use report_repository::{FinancialReportStore, ReportRepository};
pub use reported_data_repository::{ReportedDataRepository, ReportedDataStore};

#[cfg(any(test, feature = "test-utils"))]
pub use bank_repository::MockBankRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use indicator_repository::MockIndicatorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use report_repository::MockReportRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use reported_data_repository::MockReportedDataRepository;

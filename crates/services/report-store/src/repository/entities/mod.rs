//! SeaORM entities, one per table.

pub mod bank;
pub mod exact_decimal;
pub mod financial_indicator;
pub mod financial_report;
pub mod reported_data;

pub use exact_decimal::ExactDecimal;

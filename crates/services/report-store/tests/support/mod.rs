//! Shared fixtures for the in-memory SQLite integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

use common::{DatabaseConfig, SchemaOptions};
use domain::{Bank, FinancialIndicator, FinancialReport, NewReport, PeriodType};
use report_store_lib::config::ReportStoreConfig;
use report_store_lib::infra::Database;
use report_store_lib::ReportStore;

/// A single pooled connection keeps the in-memory database alive for the test.
pub fn memory_config() -> ReportStoreConfig {
    ReportStoreConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            sql_logging: false,
        },
        schema: SchemaOptions::default(),
    }
}

pub async fn open_store() -> (Database, ReportStore) {
    ReportStore::open(&memory_config())
        .await
        .expect("open in-memory store")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub async fn merchants_bank(store: &ReportStore) -> Bank {
    store
        .banks
        .register_bank("招商银行", "600036.SH")
        .await
        .expect("register bank")
}

pub async fn revenue(store: &ReportStore) -> FinancialIndicator {
    store
        .indicators
        .define_indicator("REVENUE", "营业收入", Some("Operating revenue"))
        .await
        .expect("define indicator")
}

pub async fn annual_report(store: &ReportStore, bank_id: i32, year: i32) -> FinancialReport {
    store
        .reports
        .file_report(NewReport::new(
            bank_id,
            year,
            PeriodType::FullYear,
            date(year + 1, 3, 25),
        ))
        .await
        .expect("file report")
}

//! Uniqueness and referential integrity against a migrated SQLite database.

mod support;

use rust_decimal_macros::dec;
use sea_orm::{ConnectionTrait, Statement};
use tokio_test::{assert_err, assert_ok};

use common::AppError;
use domain::{NewReport, NewReportedValue, PeriodType, ReportCorrection};
use report_store_lib::repository::{IndicatorRepository, IndicatorStore};

use support::{annual_report, date, merchants_bank, open_store, revenue};

#[tokio::test]
async fn annual_revenue_is_recorded_once() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let indicator = revenue(&store).await;
    let report = annual_report(&store, bank.id, 2024).await;

    let value = store
        .reports
        .record_value(NewReportedValue::new(report.id, indicator.id, dec!(150000.1234)))
        .await
        .unwrap();
    assert_eq!(value.indicator_value, dec!(150000.1234));
    assert_eq!(report.currency, "CNY");

    let duplicate = store
        .reports
        .record_value(NewReportedValue::new(report.id, indicator.id, dec!(1)))
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let stored = store.reports.report_values(report.id).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn values_at_full_precision_are_stored_exactly() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let report = annual_report(&store, bank.id, 2024).await;
    let largest = dec!(9999999999999999.9999);
    let cases = [
        ("TOTAL_ASSETS", dec!(1234567890123456.1234)),
        ("NET_LOSS", dec!(-8765432109876543.0001)),
        ("CAPITAL_RATIO", dec!(0.0001)),
        ("MAX_VALUE", largest),
    ];

    for (code, expected) in cases {
        let indicator = store
            .indicators
            .define_indicator(code, code, None)
            .await
            .unwrap();
        store
            .reports
            .record_value(NewReportedValue::new(report.id, indicator.id, expected))
            .await
            .unwrap();
    }

    let stored = store.reports.report_values(report.id).await.unwrap();
    let mut values: Vec<_> = stored.iter().map(|v| v.indicator_value).collect();
    values.sort();
    let mut expected: Vec<_> = cases.iter().map(|(_, value)| *value).collect();
    expected.sort();
    assert_eq!(values, expected);
    assert_eq!(values.last().map(|v| v.to_string()), Some(largest.to_string()));
}

#[tokio::test]
async fn duplicate_stock_code_is_rejected() {
    let (_db, store) = open_store().await;
    merchants_bank(&store).await;

    let result = store.banks.register_bank("另一家银行", "600036.sh").await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(store.banks.list_banks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_indicator_code_is_rejected() {
    let (_db, store) = open_store().await;
    revenue(&store).await;

    let result = store
        .indicators
        .define_indicator("revenue", "Revenue", None)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn one_report_per_bank_year_and_period() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let other = store
        .banks
        .register_bank("平安银行", "000001.SZ")
        .await
        .unwrap();
    annual_report(&store, bank.id, 2024).await;

    let duplicate = store
        .reports
        .file_report(NewReport::new(bank.id, 2024, PeriodType::FullYear, date(2025, 4, 1)))
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    // Same year, other periods and other banks are independent.
    for period in [PeriodType::FirstQuarter, PeriodType::HalfYear, PeriodType::ThreeQuarters] {
        store
            .reports
            .file_report(NewReport::new(bank.id, 2024, period, date(2024, 10, 30)))
            .await
            .unwrap();
    }
    annual_report(&store, other.id, 2024).await;
    annual_report(&store, bank.id, 2023).await;

    let reports = store.reports.list_reports(bank.id).await.unwrap();
    assert_eq!(reports.len(), 5);
    assert_eq!(reports[0].report_year, 2024);
    assert_eq!(reports.last().unwrap().report_year, 2023);

    let half_year = store
        .reports
        .find_report(bank.id, 2024, PeriodType::HalfYear)
        .await
        .unwrap();
    assert_eq!(half_year.period_type, PeriodType::HalfYear);
}

#[tokio::test]
async fn report_for_unknown_bank_is_rejected() {
    let (_db, store) = open_store().await;

    let result = store
        .reports
        .file_report(NewReport::new(999, 2024, PeriodType::FullYear, date(2025, 3, 25)))
        .await;

    assert!(matches!(result, Err(AppError::ForeignKey(_))));
}

#[tokio::test]
async fn value_for_unknown_indicator_or_report_is_rejected() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let indicator = revenue(&store).await;
    let report = annual_report(&store, bank.id, 2024).await;

    let unknown_indicator = store
        .reports
        .record_value(NewReportedValue::new(report.id, 999, dec!(1)))
        .await;
    assert!(matches!(unknown_indicator, Err(AppError::ForeignKey(_))));

    let unknown_report = store
        .reports
        .record_value(NewReportedValue::new(999, indicator.id, dec!(1)))
        .await;
    assert!(matches!(unknown_report, Err(AppError::ForeignKey(_))));
}

#[tokio::test]
async fn deleting_bank_cascades_to_reports_and_values() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let indicator = revenue(&store).await;
    let report = annual_report(&store, bank.id, 2024).await;
    store
        .reports
        .record_value(NewReportedValue::new(report.id, indicator.id, dec!(150000.1234)))
        .await
        .unwrap();

    store.banks.remove_bank(bank.id).await.unwrap();

    assert!(matches!(
        store.reports.get_report(report.id).await,
        Err(AppError::NotFound)
    ));
    assert!(store.reports.report_values(report.id).await.unwrap().is_empty());
    // Indicators are catalogue data and survive.
    assert_eq!(store.indicators.list_indicators().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_bank_removes_every_report_of_that_bank_only() {
    let (db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let other = store
        .banks
        .register_bank("平安银行", "000001.SZ")
        .await
        .unwrap();
    let indicator = revenue(&store).await;

    let mut removed = Vec::new();
    for year in [2022, 2023, 2024] {
        removed.push(annual_report(&store, bank.id, year).await);
    }
    removed.push(
        store
            .reports
            .file_report(NewReport::new(bank.id, 2024, PeriodType::HalfYear, date(2024, 8, 30)))
            .await
            .unwrap(),
    );
    let kept = annual_report(&store, other.id, 2024).await;
    for report in removed.iter().chain([&kept]) {
        store
            .reports
            .record_value(NewReportedValue::new(report.id, indicator.id, dec!(42)))
            .await
            .unwrap();
    }

    store.banks.remove_bank(bank.id).await.unwrap();

    assert!(store.reports.list_reports(bank.id).await.unwrap().is_empty());
    for report in &removed {
        assert!(store.reports.report_values(report.id).await.unwrap().is_empty());
    }
    assert_eq!(store.reports.list_reports(other.id).await.unwrap().len(), 1);
    assert_eq!(store.reports.report_values(kept.id).await.unwrap().len(), 1);

    let remaining = db
        .connection()
        .query_one(Statement::from_string(
            db.connection().get_database_backend(),
            "SELECT COUNT(*) AS total FROM reported_data",
        ))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(remaining.try_get::<i64>("", "total").unwrap(), 1);
}

#[tokio::test]
async fn deleting_report_removes_only_its_values() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let indicator = revenue(&store).await;
    let current = annual_report(&store, bank.id, 2024).await;
    let previous = annual_report(&store, bank.id, 2023).await;
    for report in [&current, &previous] {
        store
            .reports
            .record_value(NewReportedValue::new(report.id, indicator.id, dec!(10.5)))
            .await
            .unwrap();
    }

    store.reports.remove_report(current.id).await.unwrap();

    assert!(store.reports.report_values(current.id).await.unwrap().is_empty());
    assert_eq!(store.reports.report_values(previous.id).await.unwrap().len(), 1);
    assert_ok!(store.banks.get_bank(bank.id).await);
}

#[tokio::test]
async fn referenced_indicator_cannot_be_deleted() {
    let (db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let indicator = revenue(&store).await;
    let report = annual_report(&store, bank.id, 2024).await;
    store
        .reports
        .record_value(NewReportedValue::new(report.id, indicator.id, dec!(1)))
        .await
        .unwrap();

    let via_service = store.indicators.remove_indicator(indicator.id).await;
    assert!(matches!(via_service, Err(AppError::ForeignKey(_))));

    // The database enforces the restriction without the service pre-check.
    let repo = IndicatorStore::new(db.get_connection());
    assert_err!(repo.delete(indicator.id).await);
    assert!(repo.find_by_id(indicator.id).await.unwrap().is_some());

    // Once the report is gone the indicator is free.
    store.reports.remove_report(report.id).await.unwrap();
    store.indicators.remove_indicator(indicator.id).await.unwrap();
    assert!(store.indicators.list_indicators().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_period_code_is_rejected_by_database() {
    let (db, store) = open_store().await;
    let bank = merchants_bank(&store).await;

    let result = db
        .connection()
        .execute_unprepared(&format!(
            "INSERT INTO financial_reports (bank_id, report_year, period_type, report_date, currency) \
             VALUES ({}, 2024, 'Q2', '2024-08-30', 'CNY')",
            bank.id
        ))
        .await;

    assert_err!(result);
}

#[tokio::test]
async fn correction_changes_date_and_source_only() {
    let (_db, store) = open_store().await;
    let bank = merchants_bank(&store).await;
    let report = annual_report(&store, bank.id, 2024).await;

    let corrected = store
        .reports
        .correct_report(
            report.id,
            ReportCorrection {
                report_date: Some(date(2025, 3, 28)),
                source_url: Some("https://example.com/2024-annual.pdf".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(corrected.report_date, date(2025, 3, 28));
    assert_eq!(
        corrected.source_url.as_deref(),
        Some("https://example.com/2024-annual.pdf")
    );
    assert_eq!(corrected.report_year, report.report_year);
    assert_eq!(corrected.period_type, report.period_type);
}

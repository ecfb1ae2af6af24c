//! Report service - Files disclosure metadata and records reported values.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{
    FinancialReport, NewReport, NewReportedValue, PeriodType, ReportCorrection, ReportedValue,
};

use crate::repository::{ReportRepository, ReportedDataRepository};

#[async_trait]
pub trait ReportService: Send + Sync {
    /// File a report for a bank and period
    async fn file_report(&self, report: NewReport) -> AppResult<FinancialReport>;

    async fn get_report(&self, id: i32) -> AppResult<FinancialReport>;

    async fn find_report(
        &self,
        bank_id: i32,
        report_year: i32,
        period_type: PeriodType,
    ) -> AppResult<FinancialReport>;

    async fn list_reports(&self, bank_id: i32) -> AppResult<Vec<FinancialReport>>;

    /// Correct publication date or source URL
    async fn correct_report(&self, id: i32, correction: ReportCorrection)
        -> AppResult<FinancialReport>;

    /// Delete a report and its reported values
    async fn remove_report(&self, id: i32) -> AppResult<()>;

    /// Record one indicator value within a report
    async fn record_value(&self, value: NewReportedValue) -> AppResult<ReportedValue>;

    async fn report_values(&self, report_id: i32) -> AppResult<Vec<ReportedValue>>;
}

pub struct ReportManager {
    reports: Arc<dyn ReportRepository>,
    values: Arc<dyn ReportedDataRepository>,
}

impl ReportManager {
    pub fn new(reports: Arc<dyn ReportRepository>, values: Arc<dyn ReportedDataRepository>) -> Self {
        Self { reports, values }
    }
}

#[async_trait]
impl ReportService for ReportManager {
    async fn file_report(&self, report: NewReport) -> AppResult<FinancialReport> {
        report.validate()?;
        let created = self.reports.create(report).await?;
        tracing::info!(
            report_id = created.id,
            bank_id = created.bank_id,
            year = created.report_year,
            period = %created.period_type,
            "Report filed"
        );
        Ok(created)
    }

    async fn get_report(&self, id: i32) -> AppResult<FinancialReport> {
        self.reports.find_by_id(id).await?.ok_or_not_found()
    }

    async fn find_report(
        &self,
        bank_id: i32,
        report_year: i32,
        period_type: PeriodType,
    ) -> AppResult<FinancialReport> {
        self.reports
            .find_by_period(bank_id, report_year, period_type)
            .await?
            .ok_or_not_found()
    }

    async fn list_reports(&self, bank_id: i32) -> AppResult<Vec<FinancialReport>> {
        self.reports.list_for_bank(bank_id).await
    }

    async fn correct_report(
        &self,
        id: i32,
        correction: ReportCorrection,
    ) -> AppResult<FinancialReport> {
        correction.validate()?;
        self.reports.correct(id, correction).await
    }

    async fn remove_report(&self, id: i32) -> AppResult<()> {
        self.reports.delete(id).await?;
        tracing::info!(report_id = id, "Report removed");
        Ok(())
    }

    async fn record_value(&self, value: NewReportedValue) -> AppResult<ReportedValue> {
        value.validate()?;
        self.values.record(value).await
    }

    async fn report_values(&self, report_id: i32) -> AppResult<Vec<ReportedValue>> {
        self.values.list_for_report(report_id).await
    }
}

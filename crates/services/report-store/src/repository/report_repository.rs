//! Financial report repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::financial_report::{self, ActiveModel, Entity as ReportEntity};
use common::{AppError, AppResult};
use domain::{FinancialReport, NewReport, PeriodType, ReportCorrection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Report repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<FinancialReport>>;

    /// Find the report a bank filed for one fiscal period
    async fn find_by_period(
        &self,
        bank_id: i32,
        report_year: i32,
        period_type: PeriodType,
    ) -> AppResult<Option<FinancialReport>>;

    /// Insert a report.
    ///
    /// Fails with `Conflict` when the bank already has a report for the
    /// period and with `ForeignKey` when the bank does not exist.
    async fn create(&self, report: NewReport) -> AppResult<FinancialReport>;

    /// Apply a metadata correction (publication date, source URL)
    async fn correct(&self, id: i32, correction: ReportCorrection) -> AppResult<FinancialReport>;

    /// Delete report by ID, cascading to its reported values
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Reports of one bank, newest period first
    async fn list_for_bank(&self, bank_id: i32) -> AppResult<Vec<FinancialReport>>;
}

/// Concrete implementation of ReportRepository
pub struct FinancialReportStore {
    db: DatabaseConnection,
}

impl FinancialReportStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepository for FinancialReportStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<FinancialReport>> {
        let result = ReportEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(FinancialReport::from))
    }

    async fn find_by_period(
        &self,
        bank_id: i32,
        report_year: i32,
        period_type: PeriodType,
    ) -> AppResult<Option<FinancialReport>> {
        let result = ReportEntity::find()
            .filter(financial_report::Column::BankId.eq(bank_id))
            .filter(financial_report::Column::ReportYear.eq(report_year))
            .filter(
                financial_report::Column::PeriodType
                    .eq(financial_report::PeriodType::from(period_type)),
            )
            .one(&self.db)
            .await?;

        Ok(result.map(FinancialReport::from))
    }

    async fn create(&self, report: NewReport) -> AppResult<FinancialReport> {
        let entity = format!(
            "Report {} {} for bank {}",
            report.report_year, report.period_type, report.bank_id
        );
        let active_model = ActiveModel {
            bank_id: Set(report.bank_id),
            report_year: Set(report.report_year),
            period_type: Set(report.period_type.into()),
            report_date: Set(report.report_date),
            source_url: Set(report.source_url),
            currency: Set(report.currency),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, entity))?;
        tracing::debug!(report_id = model.id, bank_id = model.bank_id, "Report created");
        Ok(FinancialReport::from(model))
    }

    async fn correct(&self, id: i32, correction: ReportCorrection) -> AppResult<FinancialReport> {
        let report = ReportEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = report.into();
        if let Some(report_date) = correction.report_date {
            active.report_date = Set(report_date);
        }
        if let Some(source_url) = correction.source_url {
            active.source_url = Set(Some(source_url));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(FinancialReport::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ReportEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list_for_bank(&self, bank_id: i32) -> AppResult<Vec<FinancialReport>> {
        let models = ReportEntity::find()
            .filter(financial_report::Column::BankId.eq(bank_id))
            .order_by_desc(financial_report::Column::ReportYear)
            .order_by_desc(financial_report::Column::ReportDate)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(FinancialReport::from).collect())
    }
}

//! Reported value repository implementation.
//!
//! Values are write-once: there is no update method. A value disappears
//! only when its report is deleted.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::reported_data::{self, ActiveModel, Entity as ReportedDataEntity};
use common::{AppError, AppResult};
use domain::{NewReportedValue, ReportedValue};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Reported value repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportedDataRepository: Send + Sync {
    /// Record one value.
    ///
    /// Fails with `Conflict` when the report already holds the indicator and
    /// with `ForeignKey` when the report or indicator does not exist.
    async fn record(&self, value: NewReportedValue) -> AppResult<ReportedValue>;

    /// All values of one report ordered by indicator
    async fn list_for_report(&self, report_id: i32) -> AppResult<Vec<ReportedValue>>;

    /// Number of values referencing an indicator
    async fn count_for_indicator(&self, indicator_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of ReportedDataRepository
pub struct ReportedDataStore {
    db: DatabaseConnection,
}

impl ReportedDataStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportedDataRepository for ReportedDataStore {
    async fn record(&self, value: NewReportedValue) -> AppResult<ReportedValue> {
        let entity = format!(
            "Value of indicator {} in report {}",
            value.indicator_id, value.report_id
        );
        let active_model = ActiveModel {
            report_id: Set(value.report_id),
            indicator_id: Set(value.indicator_id),
            indicator_value: Set(value.indicator_value.into()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, entity))?;
        Ok(ReportedValue::from(model))
    }

    async fn list_for_report(&self, report_id: i32) -> AppResult<Vec<ReportedValue>> {
        let models = ReportedDataEntity::find()
            .filter(reported_data::Column::ReportId.eq(report_id))
            .order_by_asc(reported_data::Column::IndicatorId)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(ReportedValue::from).collect())
    }

    async fn count_for_indicator(&self, indicator_id: i32) -> AppResult<u64> {
        ReportedDataEntity::find()
            .filter(reported_data::Column::IndicatorId.eq(indicator_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

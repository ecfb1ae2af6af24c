//! Financial indicator repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::financial_indicator::{self, ActiveModel, Entity as IndicatorEntity};
use common::{AppError, AppResult};
use domain::{FinancialIndicator, NewIndicator};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Indicator repository trait for dependency injection.
///
/// Indicators have no update path: a definition is created once and kept
/// for as long as any reported value references it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IndicatorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<FinancialIndicator>>;

    async fn find_by_code(&self, code: &str) -> AppResult<Option<FinancialIndicator>>;

    /// Insert a new indicator; fails with `Conflict` on a duplicate code
    async fn create(&self, indicator: NewIndicator) -> AppResult<FinancialIndicator>;

    /// Delete indicator by ID; fails with `ForeignKey` while values reference it
    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn list(&self) -> AppResult<Vec<FinancialIndicator>>;
}

/// Concrete implementation of IndicatorRepository
pub struct IndicatorStore {
    db: DatabaseConnection,
}

impl IndicatorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IndicatorRepository for IndicatorStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<FinancialIndicator>> {
        let result = IndicatorEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(FinancialIndicator::from))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<FinancialIndicator>> {
        let result = IndicatorEntity::find()
            .filter(financial_indicator::Column::IndicatorCode.eq(code))
            .one(&self.db)
            .await?;

        Ok(result.map(FinancialIndicator::from))
    }

    async fn create(&self, indicator: NewIndicator) -> AppResult<FinancialIndicator> {
        let entity = format!("Indicator {}", indicator.indicator_code);
        let active_model = ActiveModel {
            indicator_code: Set(indicator.indicator_code),
            indicator_name: Set(indicator.indicator_name),
            description: Set(indicator.description),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, entity))?;
        Ok(FinancialIndicator::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = IndicatorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                AppError::from_db(e, format!("Indicator {} is still referenced by reported data", id))
            })?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<FinancialIndicator>> {
        let models = IndicatorEntity::find()
            .order_by_asc(financial_indicator::Column::IndicatorCode)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(FinancialIndicator::from).collect())
    }
}

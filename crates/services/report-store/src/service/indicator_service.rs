//! Indicator service - Maintains the catalogue of metric definitions.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{FinancialIndicator, NewIndicator};

use crate::repository::{IndicatorRepository, ReportedDataRepository};

#[async_trait]
pub trait IndicatorService: Send + Sync {
    /// Define a new indicator from raw input
    async fn define_indicator(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<FinancialIndicator>;

    async fn get_indicator_by_code(&self, code: &str) -> AppResult<FinancialIndicator>;

    async fn list_indicators(&self) -> AppResult<Vec<FinancialIndicator>>;

    /// Remove an indicator no reported value references
    async fn remove_indicator(&self, id: i32) -> AppResult<()>;
}

pub struct IndicatorManager {
    indicators: Arc<dyn IndicatorRepository>,
    values: Arc<dyn ReportedDataRepository>,
}

impl IndicatorManager {
    pub fn new(
        indicators: Arc<dyn IndicatorRepository>,
        values: Arc<dyn ReportedDataRepository>,
    ) -> Self {
        Self { indicators, values }
    }
}

#[async_trait]
impl IndicatorService for IndicatorManager {
    async fn define_indicator(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<FinancialIndicator> {
        let indicator = NewIndicator::new(code, name, description)?;
        let created = self.indicators.create(indicator).await?;
        tracing::info!(indicator_id = created.id, code = %created.indicator_code, "Indicator defined");
        Ok(created)
    }

    async fn get_indicator_by_code(&self, code: &str) -> AppResult<FinancialIndicator> {
        self.indicators
            .find_by_code(&code.trim().to_ascii_uppercase())
            .await?
            .ok_or_not_found()
    }

    async fn list_indicators(&self) -> AppResult<Vec<FinancialIndicator>> {
        self.indicators.list().await
    }

    async fn remove_indicator(&self, id: i32) -> AppResult<()> {
        // The store rejects the delete as well; checking first gives a count.
        let in_use = self.values.count_for_indicator(id).await?;
        if in_use > 0 {
            return Err(AppError::foreign_key(format!(
                "Indicator {} is still referenced by {} reported values",
                id, in_use
            )));
        }

        self.indicators.delete(id).await?;
        tracing::info!(indicator_id = id, "Indicator removed");
        Ok(())
    }
}

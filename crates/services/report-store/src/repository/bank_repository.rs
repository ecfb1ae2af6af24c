//! Bank repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::bank::{self, ActiveModel, Entity as BankEntity};
use common::{AppError, AppResult};
use domain::{Bank, NewBank, StockCode};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Bank repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Find bank by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Bank>>;

    /// Find bank by exchange stock code
    async fn find_by_stock_code(&self, code: &StockCode) -> AppResult<Option<Bank>>;

    /// Insert a new bank; fails with `Conflict` on a duplicate stock code
    async fn create(&self, bank: NewBank) -> AppResult<Bank>;

    /// Change the display name, refreshing `updated_at`
    async fn rename(&self, id: i32, bank_name: String) -> AppResult<Bank>;

    /// Delete bank by ID, cascading to its reports and their values
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Insert banks, refreshing the name of any stock code already present.
    /// Returns the number of rows written.
    async fn upsert_many(&self, banks: Vec<NewBank>) -> AppResult<u64>;

    /// List all banks ordered by ID
    async fn list(&self) -> AppResult<Vec<Bank>>;
}

/// Concrete implementation of BankRepository
pub struct BankStore {
    db: DatabaseConnection,
}

impl BankStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BankRepository for BankStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Bank>> {
        let result = BankEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Bank::from))
    }

    async fn find_by_stock_code(&self, code: &StockCode) -> AppResult<Option<Bank>> {
        let result = BankEntity::find()
            .filter(bank::Column::StockCode.eq(code.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Bank::from))
    }

    async fn create(&self, bank: NewBank) -> AppResult<Bank> {
        let entity = format!("Bank with stock code {}", bank.stock_code);
        let active_model = ActiveModel {
            bank_name: Set(bank.bank_name),
            stock_code: Set(bank.stock_code.into_string()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, entity))?;
        tracing::debug!(bank_id = model.id, stock_code = %model.stock_code, "Bank created");
        Ok(Bank::from(model))
    }

    async fn rename(&self, id: i32, bank_name: String) -> AppResult<Bank> {
        let bank = BankEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = bank.into();
        active.bank_name = Set(bank_name);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Bank::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = BankEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::debug!(bank_id = id, "Bank deleted with its reports");
        Ok(())
    }

    async fn upsert_many(&self, banks: Vec<NewBank>) -> AppResult<u64> {
        if banks.is_empty() {
            return Ok(0);
        }

        // Bulk inserts bypass ActiveModelBehavior, so stamp timestamps here.
        let now = chrono::Utc::now();
        let models = banks.into_iter().map(|bank| ActiveModel {
            bank_name: Set(bank.bank_name),
            stock_code: Set(bank.stock_code.into_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        });

        let written = BankEntity::insert_many(models)
            .on_conflict(
                OnConflict::column(bank::Column::StockCode)
                    .update_columns([bank::Column::BankName, bank::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(written)
    }

    async fn list(&self) -> AppResult<Vec<Bank>> {
        let models = BankEntity::find()
            .order_by_asc(bank::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Bank::from).collect())
    }
}

//! Bank service - Handles bank onboarding and reference-data seeding.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Bank, NewBank, StockCode, MAX_BANK_NAME_LENGTH};

use crate::repository::BankRepository;

/// Result of seeding the built-in bank list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Banks in the built-in list
    pub listed: usize,
    /// Banks that did not exist before seeding
    pub inserted: usize,
    /// Banks that existed and had their name refreshed
    pub refreshed: usize,
}

/// Bank service trait for dependency injection.
#[async_trait]
pub trait BankService: Send + Sync {
    /// Onboard a bank from raw input
    async fn register_bank(&self, bank_name: &str, stock_code: &str) -> AppResult<Bank>;

    async fn get_bank(&self, id: i32) -> AppResult<Bank>;

    async fn get_bank_by_stock_code(&self, stock_code: &str) -> AppResult<Bank>;

    async fn list_banks(&self) -> AppResult<Vec<Bank>>;

    async fn rename_bank(&self, id: i32, bank_name: &str) -> AppResult<Bank>;

    /// Delete a bank together with all its reports and reported values
    async fn remove_bank(&self, id: i32) -> AppResult<()>;

    /// Upsert the built-in list of listed banks keyed on stock code
    async fn seed_listed_banks(&self) -> AppResult<SeedSummary>;
}

/// Concrete implementation of BankService using repository.
pub struct BankManager {
    repo: Arc<dyn BankRepository>,
}

impl BankManager {
    pub fn new(repo: Arc<dyn BankRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BankService for BankManager {
    async fn register_bank(&self, bank_name: &str, stock_code: &str) -> AppResult<Bank> {
        let bank = NewBank::new(bank_name, stock_code)?;
        let created = self.repo.create(bank).await?;
        tracing::info!(bank_id = created.id, stock_code = %created.stock_code, "Bank registered");
        Ok(created)
    }

    async fn get_bank(&self, id: i32) -> AppResult<Bank> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_bank_by_stock_code(&self, stock_code: &str) -> AppResult<Bank> {
        let code = StockCode::parse(stock_code)?;
        self.repo
            .find_by_stock_code(&code)
            .await?
            .ok_or_not_found()
    }

    async fn list_banks(&self) -> AppResult<Vec<Bank>> {
        self.repo.list().await
    }

    async fn rename_bank(&self, id: i32, bank_name: &str) -> AppResult<Bank> {
        let name = bank_name.trim();
        if name.is_empty() || name.chars().count() > MAX_BANK_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Bank name must be 1 to {} characters",
                MAX_BANK_NAME_LENGTH
            )));
        }
        self.repo.rename(id, name.to_string()).await
    }

    async fn remove_bank(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(bank_id = id, "Bank removed");
        Ok(())
    }

    async fn seed_listed_banks(&self) -> AppResult<SeedSummary> {
        let banks = NewBank::listed_banks()?;
        let listed = banks.len();

        let before = self.repo.list().await?.len();
        tracing::info!(count = listed, "Writing listed banks");
        self.repo.upsert_many(banks).await?;
        let after = self.repo.list().await?.len();

        let inserted = after.saturating_sub(before);
        let summary = SeedSummary {
            listed,
            inserted,
            refreshed: listed.saturating_sub(inserted),
        };
        tracing::info!(
            inserted = summary.inserted,
            refreshed = summary.refreshed,
            "Bank seeding complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockBankRepository;
    use domain::LISTED_BANKS;

    fn bank(id: i32, name: &str, code: &str) -> Bank {
        Bank {
            id,
            bank_name: name.to_string(),
            stock_code: code.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn register_bank_validates_before_insert() {
        let mut repo = MockBankRepository::new();
        repo.expect_create().never();

        let service = BankManager::new(Arc::new(repo));
        let result = service.register_bank("招商银行", "600036").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn register_bank_normalizes_input() {
        let mut repo = MockBankRepository::new();
        repo.expect_create()
            .withf(|b| b.bank_name == "招商银行" && b.stock_code.as_str() == "600036.SH")
            .returning(|b| Ok(bank(1, &b.bank_name, b.stock_code.as_str())));

        let service = BankManager::new(Arc::new(repo));
        let created = service.register_bank(" 招商银行 ", "600036.sh").await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.stock_code, "600036.SH");
    }

    #[tokio::test]
    async fn register_bank_passes_conflict_through() {
        let mut repo = MockBankRepository::new();
        repo.expect_create()
            .returning(|b| Err(AppError::conflict(format!("Bank with stock code {}", b.stock_code))));

        let service = BankManager::new(Arc::new(repo));
        let result = service.register_bank("招商银行", "600036.SH").await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn get_bank_not_found() {
        let mut repo = MockBankRepository::new();
        repo.expect_find_by_id().with(eq(7)).returning(|_| Ok(None));

        let service = BankManager::new(Arc::new(repo));
        assert!(matches!(service.get_bank(7).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn rename_rejects_blank_name() {
        let mut repo = MockBankRepository::new();
        repo.expect_rename().never();

        let service = BankManager::new(Arc::new(repo));
        assert!(matches!(
            service.rename_bank(1, "  ").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn seed_reports_inserted_and_refreshed() {
        let mut repo = MockBankRepository::new();
        let mut calls = 0;
        repo.expect_list().times(2).returning(move || {
            calls += 1;
            let count = if calls == 1 { 4 } else { LISTED_BANKS.len() };
            Ok((0..count as i32).map(|i| bank(i + 1, "x", "600000.SH")).collect())
        });
        repo.expect_upsert_many()
            .withf(|banks| banks.len() == LISTED_BANKS.len())
            .returning(|banks| Ok(banks.len() as u64));

        let service = BankManager::new(Arc::new(repo));
        let summary = service.seed_listed_banks().await.unwrap();

        assert_eq!(summary.listed, LISTED_BANKS.len());
        assert_eq!(summary.inserted, LISTED_BANKS.len() - 4);
        assert_eq!(summary.refreshed, 4);
    }
}

//! Report Store Library
//!
//! Relational storage for listed-bank financial disclosures: banks, the
//! indicator catalogue, report metadata and the reported values linking them.
//! The `report-store` binary wraps the operational commands defined here.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::ReportStoreConfig;
use crate::infra::{Database, DatabaseCreation};
use crate::repository::{BankStore, FinancialReportStore, IndicatorStore, ReportedDataStore};
use crate::service::{
    BankManager, BankService, IndicatorManager, IndicatorService, ReportManager, ReportService,
    SeedSummary,
};

/// Services wired against one database connection.
#[derive(Clone)]
pub struct ReportStore {
    pub banks: Arc<dyn BankService>,
    pub indicators: Arc<dyn IndicatorService>,
    pub reports: Arc<dyn ReportService>,
}

impl ReportStore {
    /// Build every service on top of an open database.
    pub fn new(db: &Database) -> Self {
        let values = Arc::new(ReportedDataStore::new(db.get_connection()));

        Self {
            banks: Arc::new(BankManager::new(Arc::new(BankStore::new(db.get_connection())))),
            indicators: Arc::new(IndicatorManager::new(
                Arc::new(IndicatorStore::new(db.get_connection())),
                values.clone(),
            )),
            reports: Arc::new(ReportManager::new(
                Arc::new(FinancialReportStore::new(db.get_connection())),
                values,
            )),
        }
    }

    /// Connect, apply pending migrations and build the services.
    pub async fn open(config: &ReportStoreConfig) -> AppResult<(Database, Self)> {
        let db = Database::connect(&config.database).await?;
        let store = Self::new(&db);
        Ok((db, store))
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction, config: &ReportStoreConfig) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Create the configured database on its server.
pub async fn create_database(config: &ReportStoreConfig) -> AppResult<DatabaseCreation> {
    let outcome = Database::create_database(&config.database, &config.schema).await?;
    match outcome {
        DatabaseCreation::Created => println!("Database created"),
        DatabaseCreation::AlreadyExists => println!("Database already exists"),
        DatabaseCreation::NotRequired => println!("Backend creates its database on connect"),
    }
    Ok(outcome)
}

/// Check that the configured database answers queries.
pub async fn ping(config: &ReportStoreConfig) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    println!("Database reachable");
    Ok(())
}

/// Upsert the built-in list of listed banks.
pub async fn seed_banks(config: &ReportStoreConfig) -> AppResult<SeedSummary> {
    let (_db, store) = ReportStore::open(config).await?;
    let summary = store.banks.seed_listed_banks().await?;
    println!(
        "Seeded {} banks ({} inserted, {} refreshed)",
        summary.listed, summary.inserted, summary.refreshed
    );
    Ok(summary)
}

/// Print every bank, as a table or as JSON.
pub async fn list_banks(config: &ReportStoreConfig, json: bool) -> AppResult<()> {
    let (_db, store) = ReportStore::open(config).await?;
    let banks = store.banks.list_banks().await?;

    if json {
        let rendered = serde_json::to_string_pretty(&banks)
            .map_err(|e| common::AppError::internal(e.to_string()))?;
        println!("{}", rendered);
        return Ok(());
    }

    for bank in &banks {
        println!("{:>4}  {:<12}  {}", bank.id, bank.stock_code, bank.bank_name);
    }
    info!(count = banks.len(), "Listed banks");
    Ok(())
}

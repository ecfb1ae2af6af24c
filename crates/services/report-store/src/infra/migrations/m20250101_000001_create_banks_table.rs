//! Migration: Create banks table.

use domain::{MAX_BANK_NAME_LENGTH, MAX_STOCK_CODE_LENGTH};
use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

use super::mysql_table_options;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut updated_at = ColumnDef::new(Banks::UpdatedAt);
        updated_at
            .timestamp_with_time_zone()
            .not_null()
            .default(Expr::current_timestamp());
        if manager.get_database_backend() == DbBackend::MySql {
            updated_at.extra("ON UPDATE CURRENT_TIMESTAMP");
        }

        let mut table = Table::create()
            .table(Banks::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Banks::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(Banks::BankName)
                    .string_len(MAX_BANK_NAME_LENGTH as u32)
                    .not_null(),
            )
            .col(
                ColumnDef::new(Banks::StockCode)
                    .string_len(MAX_STOCK_CODE_LENGTH as u32)
                    .not_null(),
            )
            .col(
                ColumnDef::new(Banks::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(&mut updated_at)
            .index(
                Index::create()
                    .name("uk_banks_stock_code")
                    .col(Banks::StockCode)
                    .unique(),
            )
            .to_owned();
        mysql_table_options(manager.get_database_backend(), &mut table, "Listed banks");

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banks::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Banks {
    Table,
    Id,
    BankName,
    StockCode,
    CreatedAt,
    UpdatedAt,
}

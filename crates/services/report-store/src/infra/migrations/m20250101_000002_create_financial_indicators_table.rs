//! Migration: Create financial_indicators table.

use domain::{MAX_INDICATOR_CODE_LENGTH, MAX_INDICATOR_NAME_LENGTH};
use sea_orm_migration::prelude::*;

use super::mysql_table_options;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create()
            .table(FinancialIndicators::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(FinancialIndicators::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(FinancialIndicators::IndicatorCode)
                    .string_len(MAX_INDICATOR_CODE_LENGTH as u32)
                    .not_null(),
            )
            .col(
                ColumnDef::new(FinancialIndicators::IndicatorName)
                    .string_len(MAX_INDICATOR_NAME_LENGTH as u32)
                    .not_null(),
            )
            .col(ColumnDef::new(FinancialIndicators::Description).text().null())
            .index(
                Index::create()
                    .name("uk_financial_indicators_code")
                    .col(FinancialIndicators::IndicatorCode)
                    .unique(),
            )
            .to_owned();
        mysql_table_options(
            manager.get_database_backend(),
            &mut table,
            "Financial indicator definitions",
        );

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(FinancialIndicators::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum FinancialIndicators {
    Table,
    Id,
    IndicatorCode,
    IndicatorName,
    Description,
}

//! Migration: Create financial_reports table.

use domain::{DEFAULT_CURRENCY, MAX_CURRENCY_LENGTH, MAX_SOURCE_URL_LENGTH, VALID_PERIOD_TYPES};
use sea_orm_migration::prelude::*;

use super::mysql_table_options;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create()
            .table(FinancialReports::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(FinancialReports::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(FinancialReports::BankId).integer().not_null())
            .col(ColumnDef::new(FinancialReports::ReportYear).integer().not_null())
            .col(
                ColumnDef::new(FinancialReports::PeriodType)
                    .string_len(2)
                    .not_null()
                    .check(
                        Expr::col(FinancialReports::PeriodType)
                            .is_in(VALID_PERIOD_TYPES.iter().copied()),
                    ),
            )
            .col(ColumnDef::new(FinancialReports::ReportDate).date().not_null())
            .col(
                ColumnDef::new(FinancialReports::SourceUrl)
                    .string_len(MAX_SOURCE_URL_LENGTH as u32)
                    .null(),
            )
            .col(
                ColumnDef::new(FinancialReports::Currency)
                    .string_len(MAX_CURRENCY_LENGTH as u32)
                    .not_null()
                    .default(DEFAULT_CURRENCY),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_financial_reports_bank")
                    .from(FinancialReports::Table, FinancialReports::BankId)
                    .to(Banks::Table, Banks::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .index(
                Index::create()
                    .name("uk_financial_reports_bank_period")
                    .col(FinancialReports::BankId)
                    .col(FinancialReports::ReportYear)
                    .col(FinancialReports::PeriodType)
                    .unique(),
            )
            .to_owned();
        mysql_table_options(
            manager.get_database_backend(),
            &mut table,
            "Financial report metadata, one per bank and period",
        );

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(FinancialReports::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum FinancialReports {
    Table,
    Id,
    BankId,
    ReportYear,
    PeriodType,
    ReportDate,
    SourceUrl,
    Currency,
}

#[derive(DeriveIden)]
enum Banks {
    Table,
    Id,
}

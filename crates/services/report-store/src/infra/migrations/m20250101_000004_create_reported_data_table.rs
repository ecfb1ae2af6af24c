//! Migration: Create reported_data table.

use domain::{VALUE_PRECISION, VALUE_SCALE};
use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

use super::mysql_table_options;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite has no exact numeric type; keep the decimal string as TEXT.
        let mut indicator_value = ColumnDef::new(ReportedData::IndicatorValue);
        match manager.get_database_backend() {
            DbBackend::Sqlite => indicator_value.text(),
            _ => indicator_value.decimal_len(VALUE_PRECISION, VALUE_SCALE),
        };
        indicator_value.not_null();

        let mut table = Table::create()
            .table(ReportedData::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(ReportedData::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(ReportedData::ReportId).integer().not_null())
            .col(ColumnDef::new(ReportedData::IndicatorId).integer().not_null())
            .col(&mut indicator_value)
            .foreign_key(
                ForeignKey::create()
                    .name("fk_reported_data_report")
                    .from(ReportedData::Table, ReportedData::ReportId)
                    .to(FinancialReports::Table, FinancialReports::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_reported_data_indicator")
                    .from(ReportedData::Table, ReportedData::IndicatorId)
                    .to(FinancialIndicators::Table, FinancialIndicators::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .index(
                Index::create()
                    .name("uk_reported_data_report_indicator")
                    .col(ReportedData::ReportId)
                    .col(ReportedData::IndicatorId)
                    .unique(),
            )
            .to_owned();
        mysql_table_options(
            manager.get_database_backend(),
            &mut table,
            "Reported indicator values per financial report",
        );

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReportedData::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReportedData {
    Table,
    Id,
    ReportId,
    IndicatorId,
    IndicatorValue,
}

#[derive(DeriveIden)]
enum FinancialReports {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum FinancialIndicators {
    Table,
    Id,
}

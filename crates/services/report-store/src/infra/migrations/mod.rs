//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}
//! Tables are created in dependency order: banks and indicators first,
//! then reports, then reported values.

use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

mod m20250101_000001_create_banks_table;
mod m20250101_000002_create_financial_indicators_table;
mod m20250101_000003_create_financial_reports_table;
mod m20250101_000004_create_reported_data_table;

/// Storage engine required for foreign keys and row-level locking on MySQL.
pub const MYSQL_ENGINE: &str = "InnoDB";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_banks_table::Migration),
            Box::new(m20250101_000002_create_financial_indicators_table::Migration),
            Box::new(m20250101_000003_create_financial_reports_table::Migration),
            Box::new(m20250101_000004_create_reported_data_table::Migration),
        ]
    }
}

/// Pin the storage engine and attach the table comment on MySQL.
///
/// Both go into the `CREATE TABLE` itself so foreign keys are created by
/// InnoDB. Other backends have no per-table engine and keep comments in the
/// entity docs.
pub(crate) fn mysql_table_options(
    backend: DbBackend,
    table: &mut TableCreateStatement,
    comment: &str,
) {
    if backend == DbBackend::MySql {
        table.engine(MYSQL_ENGINE).comment(comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widgets_table(backend: DbBackend) -> String {
        let mut table = Table::create()
            .table(Alias::new("widgets"))
            .col(ColumnDef::new(Alias::new("id")).integer().not_null().primary_key())
            .to_owned();
        mysql_table_options(backend, &mut table, "Widget catalogue");
        backend.build(&table).sql
    }

    #[test]
    fn mysql_create_table_carries_engine_and_comment() {
        let sql = widgets_table(DbBackend::MySql);
        assert!(sql.starts_with("CREATE TABLE"));
        assert!(sql.contains("ENGINE=InnoDB"), "{sql}");
        assert!(sql.contains("COMMENT 'Widget catalogue'"), "{sql}");
    }

    #[test]
    fn other_backends_get_no_table_options() {
        for backend in [DbBackend::Sqlite, DbBackend::Postgres] {
            let sql = widgets_table(backend);
            assert!(!sql.contains("ENGINE"), "{sql}");
            assert!(!sql.contains("COMMENT"), "{sql}");
        }
    }
}

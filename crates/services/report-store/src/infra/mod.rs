//! Infrastructure layer - database connection, provisioning and migrations.

mod db;
pub mod migrations;

pub use db::{split_database_url, Database, DatabaseCreation, DatabaseUrlParts};
pub use migrations::Migrator;

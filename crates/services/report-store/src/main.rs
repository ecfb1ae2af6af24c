//! Report Store - schema and reference-data management for bank disclosures.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use report_store_lib::{config::ReportStoreConfig, MigrateAction};

#[derive(Parser)]
#[command(name = "report-store")]
#[command(version, about = "Bank financial report storage")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database provisioning commands
    Db {
        #[command(subcommand)]
        action: DbCommands,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Reference data commands
    Seed {
        #[command(subcommand)]
        target: SeedCommands,
    },
    /// Bank queries
    Banks {
        #[command(subcommand)]
        action: BankCommands,
    },
}

#[derive(Subcommand)]
enum DbCommands {
    /// Create the configured database if it does not exist
    Create,
    /// Check that the database answers queries
    Ping,
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum SeedCommands {
    /// Insert or refresh the built-in list of listed banks
    Banks,
}

#[derive(Subcommand)]
enum BankCommands {
    /// List every bank
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> AppResult<()> {
    let config = ReportStoreConfig::from_env()?;
    tracing::debug!(
        max_connections = config.database.max_connections,
        collation = %config.schema.collation,
        "Configuration loaded"
    );

    match command {
        Commands::Db { action } => match action {
            DbCommands::Create => report_store_lib::create_database(&config).await.map(|_| ()),
            DbCommands::Ping => report_store_lib::ping(&config).await,
        },
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            report_store_lib::run_migrations(migrate_action, &config).await
        }
        Commands::Seed { target } => match target {
            SeedCommands::Banks => report_store_lib::seed_banks(&config).await.map(|_| ()),
        },
        Commands::Banks { action } => match action {
            BankCommands::List { json } => report_store_lib::list_banks(&config, json).await,
        },
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

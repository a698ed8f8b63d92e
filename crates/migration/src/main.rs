use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "migration")]
#[command(about = "Apply or inspect the wallet ledger schema")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Option<MigrationCommand>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum MigrationCommand {
    /// Apply every pending migration (default).
    Up,
    /// Roll back the last applied migration.
    Down,
    /// Drop everything and re-apply all migrations.
    Fresh,
    /// Print which migrations are applied.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or(MigrationCommand::Up) {
        MigrationCommand::Up => migration::Migrator::up(&db, None).await?,
        MigrationCommand::Down => migration::Migrator::down(&db, Some(1)).await?,
        MigrationCommand::Fresh => migration::Migrator::fresh(&db).await?,
        MigrationCommand::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_defaults_to_none() {
        let cli = Cli::try_parse_from(["migration", "--database-url", "sqlite::memory:"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn parses_fresh() {
        let cli =
            Cli::try_parse_from(["migration", "--database-url", "sqlite::memory:", "fresh"])
                .unwrap();
        assert_eq!(cli.command, Some(MigrationCommand::Fresh));
    }
}

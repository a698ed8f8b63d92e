use std::error::Error;

use clap::{Args, Parser, Subcommand};
use engine::{Engine, EngineError};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "wallet_admin")]
#[command(about = "Admin utilities for the wallet ledger (provision and inspect wallets)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Wallet(Wallet),
}

#[derive(Args, Debug)]
struct Wallet {
    #[command(subcommand)]
    command: WalletCommand,
}

#[derive(Subcommand, Debug)]
enum WalletCommand {
    /// Create a wallet, generating its uuid when none is given.
    Create(WalletCreateArgs),
    /// Print the balance of a wallet.
    Show(WalletShowArgs),
}

#[derive(Args, Debug)]
struct WalletCreateArgs {
    #[arg(long)]
    uuid: Option<String>,
    #[arg(long, default_value_t = 0)]
    balance: i64,
}

#[derive(Args, Debug)]
struct WalletShowArgs {
    #[arg(long)]
    uuid: String,
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Wallet(Wallet {
            command: WalletCommand::Create(args),
        }) => match engine.new_wallet(args.uuid.as_deref(), args.balance).await {
            Ok(wallet) => println!("created wallet: {} ({})", wallet.uuid, wallet.balance),
            Err(EngineError::ExistingKey(uuid)) => {
                eprintln!("wallet already exists: {uuid}");
                std::process::exit(1);
            }
            Err(EngineError::InvalidOperation(reason)) => {
                eprintln!("{reason}");
                std::process::exit(2);
            }
            Err(err) => return Err(err.into()),
        },
        Command::Wallet(Wallet {
            command: WalletCommand::Show(args),
        }) => match engine.wallet(&args.uuid).await {
            Ok(wallet) => println!("{}: {}", wallet.uuid, wallet.balance),
            Err(EngineError::KeyNotFound(uuid)) => {
                eprintln!("wallet not found: {uuid}");
                std::process::exit(1);
            }
            Err(err) => return Err(err.into()),
        },
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
    fn create_accepts_missing_uuid() {
        let cli = Cli::try_parse_from([
            "wallet_admin",
            "--database-url",
            "sqlite::memory:",
            "wallet",
            "create",
            "--balance",
            "100",
        ])
        .unwrap();

        let Command::Wallet(Wallet {
            command: WalletCommand::Create(args),
        }) = cli.command
        else {
            panic!("expected wallet create");
        };
        assert_eq!(args.uuid, None);
        assert_eq!(args.balance, 100);
    }
}

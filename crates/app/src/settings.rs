//! Handles settings for the application.
//!
//! Settings are read from an optional `settings.toml` and then from the
//! environment, which wins. `DATABASE_URL` is the only mandatory value;
//! nested keys use a double underscore (`SERVER__PORT`, `APP__LEVEL`).
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_SETTINGS_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database_url: String,
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "wallet_ledger", about = "Wallet ledger HTTP service")]
struct Args {
    /// Settings file path, without extension.
    #[arg(long)]
    config: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        Self::from_sources(args.config.as_deref().unwrap_or(DEFAULT_SETTINGS_PATH))
    }

    fn from_sources(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() {
        let settings: Settings = Config::builder()
            .set_override("database_url", "sqlite::memory:")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let res = Config::builder()
            .set_override("server.port", 8080)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>();

        assert!(res.is_err());
    }

    #[test]
    fn nested_overrides() {
        let settings: Settings = Config::builder()
            .set_override("database_url", "postgres://localhost/wallets")
            .unwrap()
            .set_override("server.port", 8080)
            .unwrap()
            .set_override("app.level", "debug")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.app.level, "debug");
    }
}

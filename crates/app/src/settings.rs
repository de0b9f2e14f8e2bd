//! Settings for the ledger service.
//!
//! Read from an optional TOML file (`config/ledger.toml` unless `--config`
//! says otherwise) and then from `MOK_LEDGER_*` environment variables, where
//! `__` separates nested keys (`MOK_LEDGER_SERVER__PORT=8080`).
use clap::Parser;
use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/ledger.toml";

#[derive(Debug, Parser)]
#[command(name = "mok_ledger", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
}

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

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            database: Database::Sqlite("sales.db".to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Ledger {
    /// VAT rate applied when a sale has VAT enabled. Engine default if unset.
    pub vat_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub ledger: Ledger,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings = Self::from_file(File::with_name(path).required(false))?;

        if let Some(level) = args.level {
            settings.app.level = level;
        }

        Ok(settings)
    }

    fn from_file<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("MOK_LEDGER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// `bind:port` the listener should use.
    pub fn address(&self) -> String {
        let bind = self.server.bind.as_deref().unwrap_or("127.0.0.1");
        format!("{}:{}", bind, self.server.port)
    }
}

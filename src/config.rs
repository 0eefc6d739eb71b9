use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use crate::models::kind::ExclusionSet;

pub const ENV_BUCKET_NAME: &str = "TARGET_BUCKET_NAME";
pub const ENV_BACKUP_PREFIX: &str = "BACKUP_PREFIX";
pub const ENV_IGNORE_KINDS: &str = "IGNORE_KINDS";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub backup: BackupConfig,
}

/// What the backup job covers and where it is written.
///
/// Every field may be empty; the execution service validates them.
#[derive(Debug, Clone, Default)]
pub struct BackupConfig {
    pub bucket_name: String,
    pub backup_prefix: String,
    pub ignore_kinds: ExclusionSet,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Enqueues datastore backup jobs")]
pub struct Args {
    /// Host to bind to (overrides DATASTORE_BACKUP_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides DATASTORE_BACKUP_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL (overrides DATASTORE_BACKUP_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Destination bucket (overrides TARGET_BUCKET_NAME)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Backup name prefix (overrides BACKUP_PREFIX)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Comma-separated kinds to leave out (overrides IGNORE_KINDS)
    #[arg(long)]
    pub ignore_kinds: Option<String>,

    /// Run migrations and exit
    #[arg(long)]
    pub migrate: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and migrate flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        let args = Args::parse();
        let migrate = args.migrate;
        let cfg = Self::from_lookup(args, |key| env::var(key).ok())?;
        Ok((cfg, migrate))
    }

    /// Merge `args` over values produced by `lookup` (normally the process environment).
    pub fn from_lookup<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_host = lookup("DATASTORE_BACKUP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let env_port = match lookup("DATASTORE_BACKUP_PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing DATASTORE_BACKUP_PORT value `{}`", value))?,
            None => 8080,
        };
        let env_db = lookup("DATASTORE_BACKUP_DATABASE_URL")
            .unwrap_or_else(|| "sqlite://./data/datastore.db".into());

        let backup = BackupConfig::from_lookup(&lookup);

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
            backup: BackupConfig {
                bucket_name: args.bucket.unwrap_or(backup.bucket_name),
                backup_prefix: args.prefix.unwrap_or(backup.backup_prefix),
                ignore_kinds: args
                    .ignore_kinds
                    .as_deref()
                    .map(ExclusionSet::parse)
                    .unwrap_or(backup.ignore_kinds),
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl BackupConfig {
    /// Absent variables read as empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bucket_name: lookup(ENV_BUCKET_NAME).unwrap_or_default(),
            backup_prefix: lookup(ENV_BACKUP_PREFIX).unwrap_or_default(),
            ignore_kinds: ExclusionSet::parse(&lookup(ENV_IGNORE_KINDS).unwrap_or_default()),
        }
    }
}

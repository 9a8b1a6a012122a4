use crate::cli::Cli;
use crate::domain::models::{ConfigFile, Settings};
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("no database directory configured: set database_dir in {0} or pass --database-dir")]
    MissingDatabaseDir(String),
    #[error("HOME is not set; pass --config explicitly")]
    NoHome,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(home).join(".config/seqdoctor/config.toml"))
}

pub fn load_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

/// Merges the config file with command line overrides; flags win.
pub fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config_path = match &cli.config {
        Some(p) => p.clone(),
        None => default_config_path()?,
    };
    let file = load_config_file(&config_path)?;
    merge(config_path, file, cli.database_dir.clone(), cli.bin.clone())
}

fn merge(
    config_path: PathBuf,
    file: ConfigFile,
    database_dir: Option<PathBuf>,
    bin: Option<PathBuf>,
) -> anyhow::Result<Settings> {
    let database_dir = database_dir
        .or(file.database_dir)
        .ok_or_else(|| ConfigError::MissingDatabaseDir(config_path.display().to_string()))?;
    Ok(Settings {
        config_path,
        database_dir,
        bin: bin.or(file.bin),
        databases: file.databases,
    })
}

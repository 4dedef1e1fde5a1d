use crate::cli::{ChainSelectionKind, Cli};
use crate::domain::constants::{CONFIG_RELATIVE_PATH, DEFAULT_CHAIN_PREFIX, DEFAULT_SKIP_COLUMNS};
use crate::domain::models::{ChainSelection, ConfigFile, ScanConfig};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(char),
    #[error("chain prefix must not be empty")]
    EmptyPrefix,
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(CONFIG_RELATIVE_PATH))
}

fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading default config");
            read_config(&path)
        }
        _ => Ok(ConfigFile::default()),
    }
}

/// Defaults, then the config file, then CLI flags.
pub fn resolve_scan_config(file: ConfigFile, cli: &Cli) -> Result<ScanConfig, ConfigError> {
    let defaults = ScanConfig::default();

    let kind = cli
        .chain_selection
        .or(file.chain_selection)
        .unwrap_or(ChainSelectionKind::Prefix);
    let selection = match kind {
        ChainSelectionKind::Prefix => {
            let prefix = cli
                .prefix
                .clone()
                .or(file.prefix)
                .unwrap_or_else(|| DEFAULT_CHAIN_PREFIX.to_string());
            if prefix.is_empty() {
                return Err(ConfigError::EmptyPrefix);
            }
            ChainSelection::Prefix(prefix)
        }
        ChainSelectionKind::FixedOffset => ChainSelection::FixedOffset(
            cli.skip_columns
                .or(file.skip_columns)
                .unwrap_or(DEFAULT_SKIP_COLUMNS),
        ),
    };

    let delimiter = match cli.delimiter.or(file.delimiter) {
        None => defaults.delimiter,
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => return Err(ConfigError::Delimiter(c)),
    };

    Ok(ScanConfig {
        selection,
        direction: cli.direction.or(file.direction).unwrap_or(defaults.direction),
        conflict_check: cli
            .conflict_check
            .or(file.conflict_check)
            .unwrap_or(defaults.conflict_check),
        delimiter,
        fail_on_violations: cli.fail_on_violations
            || file.fail_on_violations.unwrap_or(defaults.fail_on_violations),
    })
}

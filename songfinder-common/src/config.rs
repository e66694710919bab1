//! Configuration loading and root folder resolution
//!
//! Bootstrap settings come from an optional TOML file. Values are resolved in
//! priority order:
//! 1. Command-line argument (highest priority, applied by the binary)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "SONGFINDER_ROOT_FOLDER";

/// Environment variable pointing at a TOML config file
pub const CONFIG_FILE_ENV: &str = "SONGFINDER_CONFIG";

/// File name of the SQLite document database inside the root folder
pub const DEFAULT_DATABASE_FILE: &str = "songfinder.db";

/// File name of the seed dataset inside the root folder
pub const DEFAULT_DATASET_FILE: &str = "songs.json";

/// How a name query is compared against stored titles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameMatch {
    /// Title must equal the query exactly
    #[default]
    Exact,
    /// Title must contain the query, ignoring case
    Substring,
}

impl NameMatch {
    /// Whether a stored title satisfies `query` under this mode
    ///
    /// Substring matching folds case with Unicode rules on both sides.
    pub fn matches(self, stored: &str, query: &str) -> bool {
        match self {
            NameMatch::Exact => stored == query,
            NameMatch::Substring => stored.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// HTTP status sent when no song matches a query
///
/// Only 422 (the default) and 404 are representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u16")]
pub enum NotFoundStatus {
    /// 422 Unprocessable Entity
    #[default]
    UnprocessableEntity,
    /// 404 Not Found
    NotFound,
}

impl NotFoundStatus {
    pub fn as_u16(self) -> u16 {
        match self {
            NotFoundStatus::UnprocessableEntity => 422,
            NotFoundStatus::NotFound => 404,
        }
    }
}

impl TryFrom<u16> for NotFoundStatus {
    type Error = String;

    fn try_from(code: u16) -> std::result::Result<Self, Self::Error> {
        match code {
            422 => Ok(NotFoundStatus::UnprocessableEntity),
            404 => Ok(NotFoundStatus::NotFound),
            other => Err(format!("not_found_status must be 404 or 422, got {}", other)),
        }
    }
}

/// Bootstrap configuration loaded from TOML file
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// runnable configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Root folder holding the database and dataset
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Interface to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite database file (defaults to `<root>/songfinder.db`)
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// JSON dataset seeded at startup (defaults to `<root>/songs.json`)
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Title comparison mode for name lookups
    #[serde(default)]
    pub name_match: NameMatch,

    /// HTTP status returned when no song matches (404 or 422)
    #[serde(default)]
    pub not_found_status: NotFoundStatus,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5730
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            root_folder: None,
            host: default_host(),
            port: default_port(),
            database_path: None,
            dataset_path: None,
            name_match: NameMatch::default(),
            not_found_status: NotFoundStatus::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// A missing file is an error here; callers decide whether a config file
    /// is optional via [`locate_config_file`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::Config("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Database file, relative to the resolved root folder unless configured
    pub fn database_path(&self, root_folder: &Path) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| root_folder.join(DEFAULT_DATABASE_FILE))
    }

    /// Dataset file, relative to the resolved root folder unless configured
    pub fn dataset_path(&self, root_folder: &Path) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(|| root_folder.join(DEFAULT_DATASET_FILE))
    }
}

/// Find the config file to load, if any
///
/// An explicit CLI path or `SONGFINDER_CONFIG` is returned even when the file
/// does not exist, so loading it reports the problem. The per-user default
/// location is only returned when present.
pub fn locate_config_file(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    default_config_file().filter(|path| path.exists())
}

/// Per-user config file location (`<config_dir>/songfinder/config.toml`)
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("songfinder").join("config.toml"))
}

/// Resolve the root folder
///
/// Priority: CLI argument, `SONGFINDER_ROOT_FOLDER`, TOML `root_folder`,
/// then the OS default.
pub fn resolve_root_folder(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.root_folder {
        return path.clone();
    }

    default_root_folder()
}

/// Get OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/songfinder
        dirs::data_local_dir()
            .map(|d| d.join("songfinder"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/songfinder"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/songfinder
        dirs::data_dir()
            .map(|d| d.join("songfinder"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/songfinder"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\songfinder
        dirs::data_local_dir()
            .map(|d| d.join("songfinder"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\songfinder"))
    } else {
        PathBuf::from("./songfinder_data")
    }
}

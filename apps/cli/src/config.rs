//! # Configuration
//!
//! Settings are layered, later sources winning:
//!
//! ```text
//! built-in defaults
//!   └── stockbook.toml (or the file given with --config)
//!         └── STOCKBOOK_* environment variables
//!               └── --db flag
//! ```
//!
//! ## Example `stockbook.toml`
//! ```toml
//! database_path = "/srv/shop/ecommerce.db"
//! log_filter = "warn,stockbook=debug"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::error::CliResult;

/// Database file name used when no path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "ecommerce.db";

/// Config file looked up in the working directory (any supported extension).
pub const DEFAULT_CONFIG_FILE: &str = "stockbook";

/// Default tracing filter. `RUST_LOG` overrides it.
pub const DEFAULT_LOG_FILTER: &str = "warn,stockbook=info,sqlx=warn";

/// Application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// SQLite file holding the catalog and ledger.
    pub database_path: PathBuf,

    /// Tracing filter directive.
    pub log_filter: String,
}

impl AppConfig {
    /// Loads settings from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default one is optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let mut builder = Config::builder()
            .set_default(
                "database_path",
                default_database_path().to_string_lossy().into_owned(),
            )?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("STOCKBOOK"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Applies the `--db` flag, if given.
    pub fn with_database_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }

    /// Creates the directory that will hold the database file.
    pub fn ensure_database_dir(&self) -> CliResult<()> {
        if let Some(parent) = self.database_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(dir = %parent.display(), "Creating database directory");
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// `ecommerce.db` in the platform data directory, or in the working
/// directory when the platform has none.
///
/// - **Linux**: `~/.local/share/stockbook/ecommerce.db`
/// - **macOS**: `~/Library/Application Support/stockbook/ecommerce.db`
/// - **Windows**: `%APPDATA%\stockbook\data\ecommerce.db`
pub fn default_database_path() -> PathBuf {
    match ProjectDirs::from("", "", "stockbook") {
        Some(dirs) => dirs.data_dir().join(DEFAULT_DATABASE_FILE),
        None => PathBuf::from(DEFAULT_DATABASE_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "database_path = \"/tmp/shop.db\"").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_missing_explicit_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_pool_size_is_not_configurable() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "database_path = \"/tmp/shop.db\"").unwrap();
        writeln!(file, "max_connections = 8").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();

        assert!(err.to_string().contains("max_connections"));
    }

    #[test]
    fn test_database_override() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "database_path = \"/tmp/shop.db\"").unwrap();

        let config = AppConfig::load(Some(file.path()))
            .unwrap()
            .with_database_override(Some(PathBuf::from("other.db")));
        assert_eq!(config.database_path, PathBuf::from("other.db"));

        let unchanged = config.clone().with_database_override(None);
        assert_eq!(unchanged.database_path, PathBuf::from("other.db"));
    }

    #[test]
    fn test_default_database_file_name() {
        assert!(default_database_path().ends_with(DEFAULT_DATABASE_FILE));
    }

    #[test]
    fn test_ensure_database_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: dir.path().join("nested/deeper/ecommerce.db"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        };

        config.ensure_database_dir().unwrap();

        assert!(dir.path().join("nested/deeper").is_dir());
    }
}

use crate::core::{AccountDbError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_PATH: &str = "ACCOUNTDB_PATH";
pub const ENV_BUSY_TIMEOUT_MS: &str = "ACCOUNTDB_BUSY_TIMEOUT_MS";
pub const ENV_CREATE_IF_MISSING: &str = "ACCOUNTDB_CREATE_IF_MISSING";

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Settings consumed once, when the connection is opened.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file, or ":memory:"
    pub path: String,
    pub create_if_missing: bool,
    /// Create the account table on open
    pub create_schema: bool,
    pub busy_timeout_ms: u64,
    pub foreign_keys: bool,
    pub journal_mode: JournalMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: "accounts.db".to_string(),
            create_if_missing: true,
            create_schema: true,
            busy_timeout_ms: 5000,
            foreign_keys: true,
            journal_mode: JournalMode::Wal,
        }
    }
}

impl DatabaseConfig {
    /// In-memory database with otherwise default settings.
    pub fn in_memory() -> Self {
        DatabaseConfig {
            path: ":memory:".to_string(),
            journal_mode: JournalMode::Memory,
            ..Default::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

/// SQLite journal modes accepted in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    Delete,
    Truncate,
    Persist,
    Memory,
    Wal,
    Off,
}

impl JournalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Persist => "PERSIST",
            JournalMode::Memory => "MEMORY",
            JournalMode::Wal => "WAL",
            JournalMode::Off => "OFF",
        }
    }
}

impl Config {
    /// Loads the configuration for a process.
    ///
    /// An explicit `path` must exist. Without one, the file at
    /// [`default_config_path`] is used when present, otherwise built-in
    /// defaults. Environment overrides are applied last.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
        let mut config = match path {
            Some(p) => load_config(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => load_config(&p)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Config::default()
                }
            },
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Applies `ACCOUNTDB_*` variables from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides using `lookup` to resolve variable names.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_PATH) {
            debug!("Database path overridden by {}", ENV_PATH);
            self.database.path = path;
        }
        if let Some(raw) = lookup(ENV_BUSY_TIMEOUT_MS) {
            self.database.busy_timeout_ms = raw.trim().parse().map_err(|_| {
                AccountDbError::Config(format!(
                    "{} must be an integer, got '{}'",
                    ENV_BUSY_TIMEOUT_MS, raw
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_CREATE_IF_MISSING) {
            self.database.create_if_missing = parse_bool(&raw).ok_or_else(|| {
                AccountDbError::Config(format!(
                    "{} must be a boolean, got '{}'",
                    ENV_CREATE_IF_MISSING, raw
                ))
            })?;
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `<config dir>/accountdb/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("accountdb").join("config.toml"))
}

/// Loads configuration from a TOML file at the given path.
///
/// # Example
///
/// ```no_run
/// let config = accountdb::config::load_config("config.toml").expect("Failed to load config");
/// println!("{:?}", config);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| AccountDbError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    const SAMPLE_CONFIG: &str = r#"
[database]
path = "/var/lib/accountdb/accounts.db"
create_if_missing = false
busy_timeout_ms = 250
journal_mode = "delete"
"#;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_load_config_from_str() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).expect("Failed to parse sample config");
        assert_eq!(config.database.path, "/var/lib/accountdb/accounts.db");
        assert!(!config.database.create_if_missing);
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(config.database.journal_mode, JournalMode::Delete);
        // Unset keys fall back to defaults
        assert!(config.database.create_schema);
        assert!(config.database.foreign_keys);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.database, DatabaseConfig::default());
    }

    #[test]
    fn test_unknown_journal_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[database]\njournal_mode = \"wal; DROP\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CONFIG.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.database.busy_timeout_ms, 250);
    }

    #[test]
    fn test_load_config_errors() {
        match load_config("/nonexistent/accountdb.toml") {
            Err(AccountDbError::Io(_)) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[database\npath = ").unwrap();
        match load_config(file.path()) {
            Err(AccountDbError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            (ENV_PATH, ":memory:"),
            (ENV_BUSY_TIMEOUT_MS, " 1500 "),
            (ENV_CREATE_IF_MISSING, "no"),
        ]);
        let mut config = Config::default();
        config.apply_overrides_from(|k| vars.get(k).cloned()).unwrap();

        assert!(config.database.is_in_memory());
        assert_eq!(config.database.busy_timeout_ms, 1500);
        assert!(!config.database.create_if_missing);
    }

    #[test]
    fn test_invalid_env_overrides() {
        let vars = env(&[(ENV_BUSY_TIMEOUT_MS, "soon")]);
        let mut config = Config::default();
        let err = config.apply_overrides_from(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains(ENV_BUSY_TIMEOUT_MS));

        let vars = env(&[(ENV_CREATE_IF_MISSING, "maybe")]);
        assert!(config.apply_overrides_from(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn test_default_config_path_layout() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("accountdb/config.toml"));
        }
    }
}

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Primary (structured) store: SQLite database file.
    #[serde(default = "default_database")]
    pub database: String,
    /// Fallback (flat key/value) store: JSON text file.
    #[serde(default = "default_kv_store")]
    pub kv_store: String,
    /// Where `export` writes dated files when no `--file` is given.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// `env_logger` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_kv_store() -> String {
    Config::kv_store_file().to_string_lossy().to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            kv_store: default_kv_store(),
            export_dir: default_export_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimetracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimetracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimetracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimetracker.sqlite")
    }

    /// Return the full path of the key/value fallback store
    pub fn kv_store_file() -> PathBuf {
        Self::config_dir().join("rtimetracker.kv.json")
    }

    /// Load configuration from file; a missing file yields the defaults.
    pub fn try_load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the standard config file.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        fs::write(&path, self.to_yaml()?).map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }

    /// Apply `--db` / `--store` overrides; `~/` is expanded.
    pub fn with_overrides(mut self, db: Option<&str>, store: Option<&str>) -> Self {
        if let Some(db) = db {
            self.database = expand_tilde(db).to_string_lossy().to_string();
        }
        if let Some(store) = store {
            self.kv_store = expand_tilde(store).to_string_lossy().to_string();
        }
        self
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn kv_store_path(&self) -> PathBuf {
        expand_tilde(&self.kv_store)
    }

    pub fn export_dir_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }
}

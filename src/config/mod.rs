use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

/// Contents of `~/.cuetimer/cuetimer.conf` (YAML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Hourly rate given to new tables.
    #[serde(default = "default_rate")]
    pub default_rate: i64,
    /// Fixed hall-currency → USD divisor used for display only.
    #[serde(default = "default_usd_divisor")]
    pub usd_divisor: f64,
    /// Refresh period of `watch`, in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

pub(crate) fn default_rate() -> i64 {
    29_000
}
pub(crate) fn default_usd_divisor() -> f64 {
    23_000.0
}
pub(crate) fn default_tick_interval() -> u64 {
    1_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_rate: default_rate(),
            usd_divisor: default_usd_divisor(),
            tick_interval_ms: default_tick_interval(),
        }
    }
}

impl Config {
    /// Configuration directory: `$CUETIMER_HOME`, else `~/.cuetimer`
    /// (`%APPDATA%\cuetimer` on Windows).
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("CUETIMER_HOME")
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("cuetimer")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cuetimer")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("cuetimer.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("cuetimer.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    /// Create the config directory and write a fresh config file.
    ///
    /// `custom_db` may be absolute or relative to the config directory.
    /// In test mode the config file is left alone.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => crate::utils::path::resolve_in(&dir, name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.default_rate, 29_000);
        assert_eq!(cfg.usd_divisor, 23_000.0);
        assert_eq!(cfg.tick_interval_ms, 1_000);
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config {
            database: "/srv/hall.sqlite".into(),
            default_rate: 40_000,
            usd_divisor: 25_000.0,
            tick_interval_ms: 250,
        };
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn garbage_is_a_config_error() {
        assert!(matches!(
            Config::from_yaml("database: [unclosed"),
            Err(AppError::Config(_))
        ));
    }
}

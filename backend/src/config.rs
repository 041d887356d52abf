//! Dashboard configuration file support.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables:
//!
//! - `DASHBOARD_CONFIG`: explicit path of the TOML file
//! - `DATA_DIR`: directory holding the four CSV extracts
//! - `HOST`, `PORT`: server bind address

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::repository::RepositoryError;
use crate::io::loaders::{
    CUSTOMER_TYPE_FILE, DAILY_HOURS_FILE, DAY_TYPE_HOURS_FILE, HOURS_FILE,
};
use crate::io::DataPaths;

/// Searched in order, relative to the working directory.
const DEFAULT_LOCATIONS: [&str; 3] = ["dashboard.toml", "backend/dashboard.toml", "../dashboard.toml"];

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Location of the CSV extracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_daily_hours")]
    pub daily_hours: String,
    #[serde(default = "default_hours")]
    pub hours: String,
    #[serde(default = "default_day_type_hours")]
    pub day_type_hours: String,
    #[serde(default = "default_customer_type")]
    pub customer_type: String,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("dashboard")
}

fn default_daily_hours() -> String {
    DAILY_HOURS_FILE.to_string()
}

fn default_hours() -> String {
    HOURS_FILE.to_string()
}

fn default_day_type_hours() -> String {
    DAY_TYPE_HOURS_FILE.to_string()
}

fn default_customer_type() -> String {
    CUSTOMER_TYPE_FILE.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            daily_hours: default_daily_hours(),
            hours: default_hours(),
            day_type_hours: default_day_type_hours(),
            customer_type: default_customer_type(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location, if a file exists there.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Option<Self>, RepositoryError> {
        Self::from_search_root(Path::new("."))
    }

    /// Same search as [`Self::from_default_location`], relative to `root`.
    pub fn from_search_root(root: &Path) -> Result<Option<Self>, RepositoryError> {
        DEFAULT_LOCATIONS
            .iter()
            .map(|relative| root.join(relative))
            .find(|path| path.exists())
            .map(Self::from_file)
            .transpose()
    }

    /// Resolve the effective configuration for this process.
    ///
    /// `DASHBOARD_CONFIG` wins over the default search; with neither, the
    /// built-in defaults apply. Environment overrides are applied last.
    pub fn load() -> Result<Self, RepositoryError> {
        let config = match env::var("DASHBOARD_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::from_default_location()?.unwrap_or_default(),
        };
        config.with_overrides(|key| env::var(key).ok())
    }

    /// Apply `DATA_DIR`, `HOST` and `PORT` overrides from `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, RepositoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty("DATA_DIR") {
            self.data.dir = PathBuf::from(dir);
        }
        if let Some(host) = non_empty("HOST") {
            self.server.host = host;
        }
        if let Some(port) = non_empty("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                RepositoryError::configuration(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }
        Ok(self)
    }

    /// Full paths of the four extracts.
    pub fn data_paths(&self) -> DataPaths {
        let dir = &self.data.dir;
        DataPaths {
            daily_hours: dir.join(&self.data.daily_hours),
            hours: dir.join(&self.data.hours),
            day_type_hours: dir.join(&self.data.day_type_hours),
            customer_type: dir.join(&self.data.customer_type),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

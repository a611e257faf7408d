use crate::catalog::{Catalog, CourseRecord};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Replaces the built-in catalog when present.
    #[serde(default)]
    pub catalog: Option<HashMap<String, Vec<CourseRecord>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

fn default_server_host() -> String {
    "0.0.0.0".into()
}

fn default_server_port() -> u16 {
    5000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
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

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration for the running process.
    ///
    /// `APP_CONFIG` names an optional YAML file; without it the defaults
    /// apply. `SERVER_HOST` and `SERVER_PORT` override whatever the file had.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("APP_CONFIG") {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| AppError::Config(format!("Invalid SERVER_PORT: {}", port)))?;
        }

        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(AppError::Config("Server host cannot be empty".to_string()));
        }

        if let Some(ref catalog) = self.catalog {
            let mut seen = HashSet::new();
            for faculty in catalog.keys() {
                let key = faculty.to_lowercase();
                if key.is_empty() {
                    return Err(AppError::Config(
                        "Catalog faculty names cannot be empty".to_string(),
                    ));
                }
                if !seen.insert(key) {
                    return Err(AppError::Config(format!(
                        "Catalog faculty {} is listed more than once",
                        faculty
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The configured catalog, or the built-in one.
    pub fn build_catalog(&self) -> Catalog {
        match self.catalog {
            Some(ref entries) => Catalog::from_entries(entries.clone()),
            None => Catalog::builtin(),
        }
    }
}

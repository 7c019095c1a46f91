use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RecsvcConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

impl Default for RecsvcConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_recsvc_dir()
            .join("recommendations.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

/// Returns `~/.recsvc/`
pub fn default_recsvc_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".recsvc")
}

/// Returns the default config file path: `~/.recsvc/config.toml`
pub fn default_config_path() -> PathBuf {
    default_recsvc_dir().join("config.toml")
}

impl RecsvcConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            RecsvcConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (RECSVC_DB, RECSVC_HOST,
    /// RECSVC_PORT, RECSVC_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RECSVC_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("RECSVC_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("RECSVC_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("RECSVC_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// The `host:port` pair the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RecsvcConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_level, "info");
        assert!(config.storage.db_path.ends_with("recommendations.db"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 9090

[storage]
db_path = "/tmp/test.db"
"#;
        let config: RecsvcConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.db_path, "/tmp/test.db");
        // defaults still apply for unset fields
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = RecsvcConfig::default();
        std::env::set_var("RECSVC_DB", "/tmp/override.db");
        std::env::set_var("RECSVC_PORT", "3000");
        std::env::set_var("RECSVC_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_level, "trace");

        // Clean up
        std::env::remove_var("RECSVC_DB");
        std::env::remove_var("RECSVC_PORT");
        std::env::remove_var("RECSVC_LOG_LEVEL");
    }

    #[test]
    fn non_numeric_port_override_is_ignored() {
        let mut config = RecsvcConfig::default();
        std::env::set_var("RECSVC_PORT", "not-a-port");

        config.apply_env_overrides();
        assert_eq!(config.server.port, 8080);

        std::env::remove_var("RECSVC_PORT");
    }
}

//! Daemon configuration — `navhub.toml` plus `NAVHUB_*` environment overrides.
//!
//! The file is optional and every field has a default, so a bare `navhubd`
//! serves an empty directory on `0.0.0.0:3000` backed by `navhub.db`.
//! `NAVHUB_CONFIG` points at a different file.
//!
//! | Section      | Keys                          | Override                                |
//! |--------------|-------------------------------|-----------------------------------------|
//! | `[server]`   | `host`, `port`, `assets_dir`  | `NAVHUB_HOST`, `NAVHUB_PORT`, `NAVHUB_BIND`, `NAVHUB_ASSETS_DIR` |
//! | `[database]` | `url`                         | `NAVHUB_DATABASE_URL`                   |
//! | `[logging]`  | `filter`                      | `NAVHUB_LOG`, then `RUST_LOG`           |
//! | `[admin]`    | `token`                       | `NAVHUB_ADMIN_TOKEN`                    |

use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_PATH: &str = "navhub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

/// Where the public API and the dashboard are served.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Compiled dashboard (`index.html` plus wasm bundle). Unset serves the
    /// JSON API only.
    pub assets_dir: Option<PathBuf>,
}

/// Directory storage.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` `SQLite` URL. Migrations run against it at startup.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

/// Credentials for the `/api/admin` routes.
///
/// Admin requests must carry `Authorization: Bearer <token>`. There is no
/// user store behind this: whoever holds the token may list, create and
/// edit services and categories.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub token: String,
}

impl AdminConfig {
    /// The configured token, or `None` when it is blank. Without a token the
    /// admin routes stay mounted but answer every request with 401, while the
    /// public search, click and settings routes keep working.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        Some(self.token.trim()).filter(|token| !token.is_empty())
    }
}

/// One environment variable and the field it overwrites.
type Override = (&'static str, fn(&mut Config, String));

/// Applied in order, so a later entry for the same field wins.
const OVERRIDES: &[Override] = &[
    ("NAVHUB_HOST", |c, v| c.server.host = v),
    ("NAVHUB_PORT", |c, v| {
        if let Ok(port) = v.parse() {
            c.server.port = port;
        }
    }),
    ("NAVHUB_BIND", |c, v| {
        if let Some((host, port)) = v.rsplit_once(':') {
            c.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                c.server.port = port;
            }
        }
    }),
    ("NAVHUB_ASSETS_DIR", |c, v| c.server.assets_dir = Some(PathBuf::from(v))),
    ("NAVHUB_DATABASE_URL", |c, v| c.database.url = v),
    ("NAVHUB_LOG", |c, v| c.logging.filter = v),
    ("RUST_LOG", |c, v| c.logging.filter = v),
    ("NAVHUB_ADMIN_TOKEN", |c, v| c.admin.token = v),
];

impl Config {
    /// Read the config file named by `NAVHUB_CONFIG` (default
    /// `navhub.toml`), then apply environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = lookup("NAVHUB_CONFIG").unwrap_or_else(|| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for &(key, apply) in OVERRIDES {
            if let Some(value) = lookup(key) {
                apply(self, value);
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            assets_dir: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:navhub.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "navhubd=info,navhub_app=info,navhub_adapter_http_axum=info,tower_http=debug"
                .to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

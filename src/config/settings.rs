//! TOML-based configuration for schemadoc.
//!
//! Supports a config file (schemadoc.toml) with environment variable
//! expansion, holding connection defaults that the CLI flags override.
//!
//! Example configuration:
//! ```toml
//! [connection]
//! host = "db.internal"
//! database = "sales"
//! username = "reporting"
//! password = "${SALES_DB_PASSWORD}"
//! trust_cert = true
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Connection defaults.
    pub connection: Option<ConnectionSettings>,
}

/// Connection defaults from the settings file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Server hostname.
    pub host: Option<String>,
    /// Server port.
    pub port: Option<u16>,
    /// Database name.
    pub database: Option<String>,
    /// Username.
    pub username: Option<String>,
    /// Password (supports `${ENV_VAR}` expansion).
    pub password: Option<String>,
    /// Trust the server certificate.
    pub trust_cert: bool,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            database: None,
            username: None,
            password: None,
            trust_cert: false,
        }
    }
}

impl ConnectionSettings {
    /// Get the password with environment variables expanded.
    pub fn resolved_password(&self) -> Result<Option<String>, SettingsError> {
        self.password.as_deref().map(expand_env_vars).transpose()
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SCHEMADOC_CONFIG`
    /// 2. `./schemadoc.toml`
    /// 3. `~/.config/schemadoc/config.toml`
    ///
    /// Returns defaults if no config file is found.
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("SCHEMADOC_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("schemadoc.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("schemadoc").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}

/// Expand `${VAR}` environment references in a string.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next();
            let mut var_name = String::new();
            while let Some(&ch) = chars.peek() {
                if ch == '}' {
                    chars.next();
                    break;
                }
                var_name.push(ch);
                chars.next();
            }
            let value =
                env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
            result.push_str(&value);
        } else {
            result.push(c);
        }
    }

    Ok(result)
}

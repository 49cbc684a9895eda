#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_origin, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
/// Origin of the local React dev server.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Everything the binary needs at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

/// Process-wide HTTP configuration handed to the server bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub reload: bool,
    #[serde(skip)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            reload: false,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            allow_credentials: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{}', expected 'compact' or 'json'",
                other
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub level: Option<String>,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is not set.
    pub fn filter_directive(&self) -> String {
        if self.verbose {
            "procon_sentiment=debug,info".to_string()
        } else if let Some(level) = &self.level {
            level.clone()
        } else {
            "procon_sentiment=info".to_string()
        }
    }
}

impl AppSettings {
    /// Server configuration with the CORS section folded in, ready for the
    /// server bootstrap.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            cors: self.cors.clone(),
            ..self.server.clone()
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_positive_number("server.port", self.port as usize, 1)?;
        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<()> {
        for origin in &self.allowed_origins {
            validate_origin("cors.allowed_origins", origin)?;
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.level {
            validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        self.server_config().validate()?;
        self.logging.validate()?;

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured; browser clients will be rejected");
        }
        Ok(())
    }
}

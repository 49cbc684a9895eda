use crate::config::{AppSettings, LogFormat};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "procon-sentiment")]
#[command(about = "Pros and Cons Sentiment Analysis API", version)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "PROCON_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PROCON_PORT")]
    pub port: Option<u16>,

    /// Development reload mode
    #[arg(long, env = "PROCON_RELOAD")]
    pub reload: bool,

    /// Browser origin allowed by CORS (repeatable, comma separated)
    #[arg(long = "allowed-origin", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format: compact or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl CliArgs {
    /// Defaults, then the TOML file if given, then command-line flags.
    pub fn load_settings(&self) -> Result<AppSettings> {
        let mut settings = match &self.config {
            Some(path) => AppSettings::from_file(path)?,
            None => AppSettings::default(),
        };
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut AppSettings) {
        if let Some(host) = &self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if self.reload {
            settings.server.reload = true;
        }
        if !self.allowed_origins.is_empty() {
            settings.cors.allowed_origins = self.allowed_origins.clone();
        }
        if self.verbose {
            settings.logging.verbose = true;
        }
        if let Some(format) = self.log_format {
            settings.logging.format = format;
        }
    }
}

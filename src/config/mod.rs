mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use crate::sqlite_persistence::DatabaseLocation;
use anyhow::{anyhow, bail, Result};

/// Values gathered from the command line and the environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub external_api_url: Option<String>,
    pub enrichment_timeout_sec: u64,
    pub request_timeout_sec: u64,
    pub logging_level: RequestsLoggingLevel,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database: DatabaseLocation,
    pub external_api_url: String,
    pub enrichment_timeout_sec: u64,
    pub request_timeout_sec: u64,
    pub logging_level: RequestsLoggingLevel,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let database_url = file
            .database_url
            .or_else(|| cli.database_url.clone())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                anyhow!("database_url must be specified via DATABASE_URL or in config file")
            })?;
        let database = DatabaseLocation::parse(&database_url)?;

        let external_api_url = file
            .external_api_url
            .or_else(|| cli.external_api_url.clone())
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                anyhow!("external_api_url must be specified via EXTERNAL_API_URL or in config file")
            })?;
        if !external_api_url.starts_with("http://") && !external_api_url.starts_with("https://") {
            bail!("external_api_url is not an http(s) URL: {}", external_api_url);
        }

        let logging_level = match file.logging_level {
            Some(raw) => RequestsLoggingLevel::parse(&raw)
                .ok_or_else(|| anyhow!("Unknown logging_level in config file: {}", raw))?,
            None => cli.logging_level.clone(),
        };

        let enrichment_timeout_sec = file
            .enrichment_timeout_sec
            .unwrap_or(cli.enrichment_timeout_sec);
        let request_timeout_sec = file.request_timeout_sec.unwrap_or(cli.request_timeout_sec);
        if enrichment_timeout_sec == 0 || request_timeout_sec == 0 {
            bail!("Timeouts must be at least one second");
        }

        Ok(AppConfig {
            port: file.port.unwrap_or(cli.port),
            database,
            external_api_url,
            enrichment_timeout_sec,
            request_timeout_sec,
            logging_level,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            request_timeout_sec: self.request_timeout_sec,
        }
    }
}

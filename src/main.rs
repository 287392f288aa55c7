use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use song_library_server::config::{AppConfig, CliConfig, FileConfig};
use song_library_server::{
    run_server, EnrichmentClient, RequestsLoggingLevel, SongStore, SqliteDatabase,
    SqliteSongStore, SONG_VERSIONED_SCHEMAS,
};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Optional TOML file, its values override the ones given here.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, env = "APP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database, a path, a `sqlite://` URL or `:memory:`.
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Base URL of the song details service.
    #[clap(long, env = "EXTERNAL_API_URL")]
    pub external_api_url: Option<String>,

    /// Timeout in seconds for song details requests.
    #[clap(long, env = "ENRICHMENT_TIMEOUT_SEC", default_value_t = 10)]
    pub enrichment_timeout_sec: u64,

    /// Timeout in seconds for handling a whole request.
    #[clap(long, env = "REQUEST_TIMEOUT_SEC", default_value_t = 30)]
    pub request_timeout_sec: u64,

    /// The level of logging to perform on each request.
    #[clap(long, env = "LOGGING_LEVEL", default_value = "path")]
    pub logging_level: RequestsLoggingLevel,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            port: self.port,
            database_url: self.database_url.clone(),
            external_api_url: self.external_api_url.clone(),
            enrichment_timeout_sec: self.enrichment_timeout_sec,
            request_timeout_sec: self.request_timeout_sec,
            logging_level: self.logging_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Variables already set in the environment win over the file.
    let dotenv_path = dotenvy::dotenv().ok();
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {:?}", path);
    }

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Opening SQLite database at {:?}...", config.database);
    let db = SqliteDatabase::open(&config.database, SONG_VERSIONED_SCHEMAS)?;
    let song_store = Arc::new(SqliteSongStore::new(db)?);
    match song_store.count_songs() {
        Ok(count) => info!("Library holds {} songs", count),
        Err(err) => warn!("Could not count songs: {}", err),
    }

    let details_provider = Arc::new(EnrichmentClient::new(
        config.external_api_url.clone(),
        config.enrichment_timeout_sec,
    )?);
    info!(
        "Song details service configured at {}",
        details_provider.base_url()
    );

    run_server(config.server_config(), song_store, details_provider).await
}

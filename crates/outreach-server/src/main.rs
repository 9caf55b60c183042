//! outreach server binary.
//!
//! Loads `.env`, reads `config.toml` (or the path given with `--config`)
//! layered under `OUTREACH_*` environment variables, opens the SQLite sender
//! store, and serves the HTTP API.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use outreach_api::AppState;
use outreach_core::search::ContactSearch;
use outreach_mail::{GmailClient, Mailer, SmtpRelay};
use outreach_search::{SerpClient, SerpConfig};
use outreach_server::ServerConfig;
use outreach_store_sqlite::SqliteSenderStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Outreach contact-search and bulk-mail server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the configured listen port.
  #[arg(long, env = "PORT")]
  port: Option<u16>,

  /// Override the configured SerpAPI key.
  #[arg(long, env = "SERP_API_KEY", hide_env_values = true)]
  serp_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // A missing .env file is fine.
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut server_cfg =
    ServerConfig::load(&cli.config).context("failed to load configuration")?;
  if let Some(port) = cli.port {
    server_cfg.port = port;
  }
  if let Some(key) = cli.serp_api_key {
    server_cfg.search.api_key = key;
  }
  if server_cfg.search.api_key.is_empty() {
    tracing::warn!("no search API key configured; searches will be rejected upstream");
  }
  if server_cfg.smtp.is_none() {
    tracing::info!("no [smtp] table configured; SMTP sends will fail");
  }

  let http = reqwest::Client::builder()
    .build()
    .context("failed to build HTTP client")?;

  let serp = SerpClient::with_client(
    http.clone(),
    SerpConfig::new(server_cfg.search.api_key.clone())
      .with_base_url(server_cfg.search.base_url.clone()),
  );
  let search = ContactSearch::new(serp, server_cfg.search.limits());

  let mailer = Mailer::new(
    server_cfg.smtp.clone().map(SmtpRelay::new),
    GmailClient::new(http, server_cfg.gmail.clone()),
  );

  let store = SqliteSenderStore::open(&server_cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.store_path))?;

  let state = AppState::new(search, mailer, store);
  let app = outreach_server::app(state, &server_cfg);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

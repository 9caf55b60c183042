//! HTTP server assembly for the outreach service.
//!
//! Loads [`ServerConfig`], mounts the JSON API under `/api`, and wraps it in
//! CORS, body-limit and request-tracing layers.

use std::path::{Path, PathBuf};

use axum::{
  Json, Router,
  extract::DefaultBodyLimit,
  http::HeaderValue,
  routing::get,
};
use outreach_api::{AppState, api_router};
use outreach_core::{
  mail::MailTransport,
  search::{SearchLimits, SearchProvider},
  sender::SenderStore,
};
use outreach_mail::{GmailConfig, SmtpConfig};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `OUTREACH_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:             String,
  #[serde(default = "default_port")]
  pub port:             u16,
  #[serde(default = "default_allowed_origins")]
  pub allowed_origins:  Vec<String>,
  #[serde(default = "default_store_path")]
  pub store_path:       PathBuf,
  #[serde(default = "default_max_upload_bytes")]
  pub max_upload_bytes: usize,
  #[serde(default)]
  pub search:           SearchSettings,
  #[serde(default)]
  pub smtp:             Option<SmtpConfig>,
  #[serde(default)]
  pub gmail:            GmailConfig,
}

/// The `[search]` table.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchSettings {
  #[serde(default)]
  pub api_key:    String,
  #[serde(default = "default_search_url")]
  pub base_url:   String,
  #[serde(default = "default_cap")]
  pub cap:        usize,
  #[serde(default = "default_page_limit")]
  pub page_limit: usize,
  #[serde(default = "default_page_size")]
  pub page_size:  usize,
}

impl Default for SearchSettings {
  fn default() -> Self {
    Self {
      api_key:    String::new(),
      base_url:   default_search_url(),
      cap:        default_cap(),
      page_limit: default_page_limit(),
      page_size:  default_page_size(),
    }
  }
}

impl SearchSettings {
  pub fn limits(&self) -> SearchLimits {
    SearchLimits {
      cap:        self.cap,
      page_limit: self.page_limit,
      page_size:  self.page_size,
    }
  }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_allowed_origins() -> Vec<String> {
  vec!["http://localhost:3000".to_string(), "http://localhost:3001".to_string()]
}
fn default_store_path() -> PathBuf { PathBuf::from("outreach.sqlite3") }
fn default_max_upload_bytes() -> usize { 25 * 1024 * 1024 }
fn default_search_url() -> String { outreach_search::SerpConfig::DEFAULT_BASE_URL.to_string() }
fn default_cap() -> usize { SearchLimits::default().cap }
fn default_page_limit() -> usize { SearchLimits::default().page_limit }
fn default_page_size() -> usize { SearchLimits::default().page_size }

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `OUTREACH_*` environment
  /// variables (`__` separates nested keys, e.g. `OUTREACH_SEARCH__API_KEY`).
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("OUTREACH")
          .prefix_separator("_")
          .separator("__")
          .list_separator(",")
          .with_list_parse_key("allowed_origins")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  /// Parse a TOML document without consulting the environment.
  pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from_str(toml, config::FileFormat::Toml))
      .build()?
      .try_deserialize()
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// `GET /`: liveness probe.
async fn root() -> Json<Value> {
  Json(json!({ "status": "Backend is running!" }))
}

/// Build the CORS layer for `origins`. A `*` entry mirrors any origin.
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request rather than using a wildcard.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let allow_origin = if origins.iter().any(|o| o == "*") {
    AllowOrigin::mirror_request()
  } else {
    let values: Vec<HeaderValue> = origins
      .iter()
      .filter_map(|o| match HeaderValue::from_str(o) {
        Ok(v) => Some(v),
        Err(_) => {
          tracing::warn!(origin = %o, "ignoring invalid CORS origin");
          None
        }
      })
      .collect();
    AllowOrigin::list(values)
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_credentials(true)
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
}

/// Build the full application router.
pub fn app<P, M, S>(state: AppState<P, M, S>, config: &ServerConfig) -> Router
where
  P: SearchProvider + 'static,
  M: MailTransport + 'static,
  S: SenderStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .nest("/api", api_router(state))
    .layer(DefaultBodyLimit::max(config.max_upload_bytes))
    .layer(cors_layer(&config.allowed_origins))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests;

//! Configuration and router-assembly tests.

use axum::{
  body::Body,
  http::{Method, Request, StatusCode, header},
};
use outreach_api::AppState;
use outreach_core::search::ContactSearch;
use outreach_mail::{GmailClient, GmailConfig, Mailer};
use outreach_search::{SerpClient, SerpConfig};
use outreach_store_sqlite::SqliteSenderStore;
use tower::ServiceExt as _;

use crate::{ServerConfig, app};

const MINIMAL: &str = r#"
[search]
api_key = "secret"
"#;

async fn make_app(config: &ServerConfig) -> axum::Router {
  let http = reqwest::Client::new();
  let serp = SerpClient::with_client(
    http.clone(),
    SerpConfig::new("unused").with_base_url("http://127.0.0.1:9/search"),
  );
  let state = AppState::new(
    ContactSearch::new(serp, config.search.limits()),
    Mailer::new(None, GmailClient::new(http, GmailConfig::default())),
    SqliteSenderStore::open_in_memory().await.unwrap(),
  );
  app(state, config)
}

#[test]
fn config_defaults_apply() {
  let cfg = ServerConfig::from_toml(MINIMAL).unwrap();
  assert_eq!(cfg.port, 8000);
  assert_eq!(cfg.search.api_key, "secret");
  assert_eq!(cfg.search.base_url, "https://serpapi.com/search");
  assert_eq!((cfg.search.cap, cfg.search.page_limit, cfg.search.page_size), (7, 30, 5));
  assert_eq!(cfg.allowed_origins, ["http://localhost:3000", "http://localhost:3001"]);
  assert!(cfg.smtp.is_none());
  assert_eq!(cfg.gmail.api_base, "https://gmail.googleapis.com");
}

#[test]
fn config_overrides_and_smtp_table() {
  let cfg = ServerConfig::from_toml(
    r#"
port = 9000
allowed_origins = ["*"]

[search]
api_key = "k"
cap = 50
page_size = 10

[smtp]
password = "app-password"
"#,
  )
  .unwrap();
  assert_eq!(cfg.port, 9000);
  assert_eq!(cfg.search.limits().cap, 50);
  assert_eq!(cfg.search.limits().page_size, 10);
  assert_eq!(cfg.search.limits().page_limit, 30);
  let smtp = cfg.smtp.unwrap();
  assert_eq!(smtp.host, "smtp.gmail.com");
  assert_eq!(smtp.port, 465);
  assert!(smtp.username.is_none());
}

#[tokio::test]
async fn root_reports_running() {
  let cfg = ServerConfig::from_toml(MINIMAL).unwrap();
  let req = Request::builder().uri("/").body(Body::empty()).unwrap();
  let resp = make_app(&cfg).await.oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
  assert_eq!(body["status"], "Backend is running!");
}

#[tokio::test]
async fn api_is_nested_under_prefix() {
  let cfg = ServerConfig::from_toml(MINIMAL).unwrap();
  let req = Request::builder().uri("/api/templates").body(Body::empty()).unwrap();
  let resp = make_app(&cfg).await.oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
}

fn preflight(origin: &str) -> Request<Body> {
  Request::builder()
    .method(Method::OPTIONS)
    .uri("/api/search")
    .header(header::ORIGIN, origin)
    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
    .body(Body::empty())
    .unwrap()
}

#[tokio::test]
async fn cors_allows_configured_origin_with_credentials() {
  let cfg = ServerConfig::from_toml(MINIMAL).unwrap();
  let resp = make_app(&cfg).await.oneshot(preflight("http://localhost:3000")).await.unwrap();
  let headers = resp.headers();
  assert_eq!(
    headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
    "http://localhost:3000"
  );
  assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn cors_rejects_unlisted_origin() {
  let cfg = ServerConfig::from_toml(MINIMAL).unwrap();
  let resp = make_app(&cfg).await.oneshot(preflight("https://evil.example")).await.unwrap();
  assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn cors_wildcard_mirrors_origin() {
  let mut cfg = ServerConfig::from_toml(MINIMAL).unwrap();
  cfg.allowed_origins = vec!["*".to_string()];
  let resp = make_app(&cfg).await.oneshot(preflight("https://app.example")).await.unwrap();
  assert_eq!(
    resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
    "https://app.example"
  );
}

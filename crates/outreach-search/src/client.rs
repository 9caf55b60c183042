//! Async HTTP client for the SerpAPI search endpoint.

use outreach_core::search::{ResultItem, SearchPage, SearchProvider};
use reqwest::Client;
use serde::Deserialize;

use crate::{Error, Result};

/// Connection settings for SerpAPI.
#[derive(Debug, Clone)]
pub struct SerpConfig {
  pub api_key:  String,
  pub base_url: String,
  pub engine:   String,
  pub language: String,
}

impl SerpConfig {
  pub const DEFAULT_BASE_URL: &'static str = "https://serpapi.com/search";

  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key:  api_key.into(),
      base_url: Self::DEFAULT_BASE_URL.to_string(),
      engine:   "google".to_string(),
      language: "en".to_string(),
    }
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

/// Async client for the SerpAPI JSON endpoint.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct SerpClient {
  client: Client,
  config: SerpConfig,
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
  #[serde(default)]
  organic_results: Vec<ResultItem>,
}

impl SerpClient {
  pub fn new(config: SerpConfig) -> Result<Self> {
    let client = Client::builder().build()?;
    Ok(Self { client, config })
  }

  /// Use an existing client, e.g. one shared with other upstreams.
  pub fn with_client(client: Client, config: SerpConfig) -> Self {
    Self { client, config }
  }

  /// `GET <base_url>?engine=…&q=…&api_key=…&hl=…&num=…&start=…`
  async fn get_page(&self, query: &str, start: usize, page_size: usize) -> Result<SearchPage> {
    let resp = self
      .client
      .get(&self.config.base_url)
      .query(&[
        ("engine", self.config.engine.as_str()),
        ("q", query),
        ("api_key", self.config.api_key.as_str()),
        ("hl", self.config.language.as_str()),
      ])
      .query(&[("num", page_size), ("start", start)])
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      tracing::error!(status = status.as_u16(), %body, "search provider error");
      return Err(Error::Status {
        status: status.as_u16(),
        body,
      });
    }

    let bytes = resp.bytes().await?;
    let parsed: SerpResponse = serde_json::from_slice(&bytes)?;
    tracing::debug!(start, items = parsed.organic_results.len(), "fetched search page");
    Ok(SearchPage {
      items: parsed.organic_results,
    })
  }
}

impl SearchProvider for SerpClient {
  type Error = Error;

  async fn fetch_page(&self, query: &str, start: usize, page_size: usize) -> Result<SearchPage> {
    self.get_page(query, start, page_size).await
  }
}

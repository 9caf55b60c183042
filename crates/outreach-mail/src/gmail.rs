//! OAuth channel: the Gmail REST API.

use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use lettre::Message;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::{Error, Result};

/// Gmail API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GmailConfig {
  #[serde(default = "default_api_base")]
  pub api_base: String,
}

fn default_api_base() -> String { "https://gmail.googleapis.com".to_string() }

impl Default for GmailConfig {
  fn default() -> Self {
    Self {
      api_base: default_api_base(),
    }
  }
}

#[derive(Debug, Deserialize)]
struct SentMessage {
  id: String,
}

/// Sends prepared messages through `users.messages.send` as the token owner.
#[derive(Clone)]
pub struct GmailClient {
  client: Client,
  config: GmailConfig,
}

impl GmailClient {
  pub fn new(client: Client, config: GmailConfig) -> Self { Self { client, config } }

  fn send_url(&self) -> String {
    format!(
      "{}/gmail/v1/users/me/messages/send",
      self.config.api_base.trim_end_matches('/')
    )
  }

  /// `POST /gmail/v1/users/me/messages/send` with `{"raw": base64url(message)}`.
  ///
  /// Returns the provider's message id.
  pub async fn send(&self, access_token: &str, message: &Message) -> Result<String> {
    let raw = URL_SAFE.encode(message.formatted());
    let resp = self
      .client
      .post(self.send_url())
      .bearer_auth(access_token)
      .json(&json!({ "raw": raw }))
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(Error::Status {
        status: status.as_u16(),
        body,
      });
    }

    let sent: SentMessage = resp.json().await?;
    tracing::debug!(message_id = %sent.id, "gmail accepted message");
    Ok(sent.id)
  }
}

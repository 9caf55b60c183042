//! SMTP channel: implicit-TLS relay with password authentication.

use std::{
  collections::HashMap,
  fmt,
  sync::{Arc, Mutex, PoisonError},
};

use lettre::{
  AsyncSmtpTransport, AsyncTransport as _, Message, Tokio1Executor,
  transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::Result;

/// SMTP relay settings, deserialised from the `[smtp]` config table.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  #[serde(default = "default_host")]
  pub host:     String,
  #[serde(default = "default_port")]
  pub port:     u16,
  /// Login name. When absent the sender address is used.
  #[serde(default)]
  pub username: Option<String>,
  pub password: String,
}

fn default_host() -> String { "smtp.gmail.com".to_string() }

fn default_port() -> u16 { 465 }

/// Sends prepared messages through the configured relay.
///
/// One pooled transport is kept per login, so consecutive messages from the
/// same sender reuse an authenticated connection.
#[derive(Clone)]
pub struct SmtpRelay {
  config:     SmtpConfig,
  transports: Arc<Mutex<HashMap<String, AsyncSmtpTransport<Tokio1Executor>>>>,
}

impl fmt::Debug for SmtpRelay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SmtpRelay")
      .field("host", &self.config.host)
      .field("port", &self.config.port)
      .finish_non_exhaustive()
  }
}

impl SmtpRelay {
  pub fn new(config: SmtpConfig) -> Self {
    Self { config, transports: Arc::default() }
  }

  /// The login used when sending as `sender`.
  pub fn login<'a>(&'a self, sender: &'a str) -> &'a str {
    self.config.username.as_deref().unwrap_or(sender)
  }

  /// The transport for `login`, built on first use.
  pub(crate) fn transport(&self, login: &str) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
    let mut transports = self.transports.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(transport) = transports.get(login) {
      return Ok(transport.clone());
    }

    tracing::debug!(host = %self.config.host, login, "opening smtp transport");
    let credentials = Credentials::new(login.to_owned(), self.config.password.clone());
    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
      .port(self.config.port)
      .credentials(credentials)
      .build();
    transports.insert(login.to_owned(), transport.clone());
    Ok(transport)
  }

  pub async fn send(&self, sender: &str, message: Message) -> Result<()> {
    let transport = self.transport(self.login(sender))?;
    let response = transport.send(message).await?;
    tracing::debug!(code = %response.code(), "smtp accepted message");
    Ok(())
  }

  #[cfg(test)]
  pub(crate) fn cached_transports(&self) -> usize {
    self.transports.lock().unwrap_or_else(PoisonError::into_inner).len()
  }
}

//! Error type for `outreach-mail`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid address: {0}")]
  Address(#[from] lettre::address::AddressError),

  #[error("invalid attachment content type: {0}")]
  ContentType(String),

  #[error("message build error: {0}")]
  Message(#[from] lettre::error::Error),

  #[error("smtp error: {0}")]
  Smtp(#[from] lettre::transport::smtp::Error),

  #[error("smtp delivery is not configured")]
  SmtpNotConfigured,

  #[error("no access token supplied for oauth delivery")]
  MissingAccessToken,

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// The mail API answered with a non-success status.
  #[error("mail api returned {status}: {body}")]
  Status { status: u16, body: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

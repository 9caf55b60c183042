//! Error type for `outreach-search`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The provider answered with a non-success status.
  #[error("search provider returned {status}: {body}")]
  Status { status: u16, body: String },

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("malformed search response: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

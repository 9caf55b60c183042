//! Error types for `outreach-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no recipients supplied")]
  NoRecipients,

  #[error("sender address is empty")]
  EmptySender,

  #[error("missing field: {0}")]
  MissingField(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

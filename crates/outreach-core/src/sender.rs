//! The `SenderStore` trait: an append-only log of sender addresses.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded use of a sender address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderRecord {
  pub sender_id:   Uuid,
  pub address:     String,
  pub recorded_at: DateTime<Utc>,
}

/// Abstraction over the sender-address store.
///
/// Writes are append-only; recording the same address twice yields two
/// records.
pub trait SenderStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `address` and return the stored record. The timestamp is set by
  /// the store.
  fn record_sender<'a>(
    &'a self,
    address: &'a str,
  ) -> impl Future<Output = Result<SenderRecord, Self::Error>> + Send + 'a;

  /// All records, oldest first.
  fn list_senders(
    &self,
  ) -> impl Future<Output = Result<Vec<SenderRecord>, Self::Error>> + Send + '_;
}

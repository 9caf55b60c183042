//! [`SqliteSenderStore`], the SQLite implementation of [`SenderStore`].

use std::path::Path;

use chrono::Utc;
use outreach_core::sender::{SenderRecord, SenderStore};
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawSender, encode_dt, encode_uuid},
  schema::SCHEMA,
};

/// A sender store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteSenderStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteSenderStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl SenderStore for SqliteSenderStore {
  type Error = Error;

  async fn record_sender(&self, address: &str) -> Result<SenderRecord> {
    let address = address.trim();
    if address.is_empty() {
      return Err(Error::EmptyAddress);
    }

    let record = SenderRecord {
      sender_id:   Uuid::new_v4(),
      address:     address.to_owned(),
      recorded_at: Utc::now(),
    };

    let id_str      = encode_uuid(record.sender_id);
    let address_str = record.address.clone();
    let at_str      = encode_dt(record.recorded_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO senders (sender_id, address, recorded_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, address_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn list_senders(&self) -> Result<Vec<SenderRecord>> {
    let raws: Vec<RawSender> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT sender_id, address, recorded_at FROM senders ORDER BY recorded_at, rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSender {
              sender_id:   row.get(0)?,
              address:     row.get(1)?,
              recorded_at: row.get(2)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSender::into_record).collect()
  }
}

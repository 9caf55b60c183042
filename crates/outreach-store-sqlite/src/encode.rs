//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Timestamps are RFC 3339 strings; UUIDs are hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use outreach_core::sender::SenderRecord;
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// A `senders` row as read from SQLite, before decoding.
pub struct RawSender {
  pub sender_id:   String,
  pub address:     String,
  pub recorded_at: String,
}

impl RawSender {
  pub fn into_record(self) -> Result<SenderRecord> {
    Ok(SenderRecord {
      sender_id:   decode_uuid(&self.sender_id)?,
      address:     self.address,
      recorded_at: decode_dt(&self.recorded_at)?,
    })
  }
}

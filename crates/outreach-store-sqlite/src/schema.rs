//! SQL schema for the outreach SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Append-only. The same address may appear many times.
CREATE TABLE IF NOT EXISTS senders (
    sender_id   TEXT PRIMARY KEY,
    address     TEXT NOT NULL,
    recorded_at TEXT NOT NULL    -- ISO 8601 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS senders_recorded_idx ON senders(recorded_at);

PRAGMA user_version = 1;
";

//! SQL schema for the rolodex SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    contact_id    TEXT PRIMARY KEY,
    first_name    TEXT NOT NULL,
    last_name     TEXT,
    email         TEXT,
    phone_numbers TEXT NOT NULL DEFAULT '{}',  -- JSON object: label -> number
    created_at    TEXT NOT NULL,               -- RFC 3339 UTC; set once at insert
    updated_at    TEXT NOT NULL                -- RFC 3339 UTC; overwritten on replace
);

-- Listings are always ordered by first name.
CREATE INDEX IF NOT EXISTS contacts_first_name_idx ON contacts(first_name);

PRAGMA user_version = 1;
";

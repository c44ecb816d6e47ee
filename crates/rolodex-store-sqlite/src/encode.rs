//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; the phone-number map is stored
//! as compact JSON.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rolodex_core::contact::Contact;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Phone numbers ───────────────────────────────────────────────────────────

pub fn encode_phone_numbers(map: &BTreeMap<String, String>) -> Result<String> {
  Ok(serde_json::to_string(map)?)
}

pub fn decode_phone_numbers(s: &str) -> Result<BTreeMap<String, String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub contact_id:    String,
  pub first_name:    String,
  pub last_name:     Option<String>,
  pub email:         Option<String>,
  pub phone_numbers: String,
  pub created_at:    String,
  pub updated_at:    String,
}

impl RawContact {
  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:            self.contact_id,
      first_name:    self.first_name,
      last_name:     self.last_name,
      email:         self.email,
      phone_numbers: decode_phone_numbers(&self.phone_numbers)?,
      created_at:    decode_dt(&self.created_at)?,
      updated_at:    decode_dt(&self.updated_at)?,
    })
  }
}

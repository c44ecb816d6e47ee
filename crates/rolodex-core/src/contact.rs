//! Contact — the single entity managed by the service.
//!
//! Three shapes of the same record travel through the system:
//!
//! - [`Contact`]: the stored form, including the server-assigned timestamps.
//!   Never serialised to clients directly.
//! - [`NewContact`] / [`ContactReplacement`]: what clients may submit.
//!   Unknown properties are rejected at deserialisation time.
//! - [`ContactView`]: the filtered projection returned to clients.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Stored form ─────────────────────────────────────────────────────────────

/// A stored contact record.
///
/// `id` and both timestamps are assigned by the store. `created_at` is set
/// once at insert; `updated_at` is overwritten on every successful replace.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
  pub id:            String,
  pub first_name:    String,
  pub last_name:     Option<String>,
  pub email:         Option<String>,
  /// Label (e.g. "mobile", "work") to phone-number string.
  pub phone_numbers: BTreeMap<String, String>,
  pub created_at:    DateTime<Utc>,
  pub updated_at:    DateTime<Utc>,
}

// ─── Input shapes ────────────────────────────────────────────────────────────

/// The client-writable fields of a contact.
///
/// This is the `POST /contacts` body (a client-supplied `_id` is an unknown
/// property and therefore rejected) and the payload handed to
/// [`ContactStore::insert`](crate::store::ContactStore::insert) and
/// [`ContactStore::replace`](crate::store::ContactStore::replace).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewContact {
  pub first_name:    String,
  pub last_name:     Option<String>,
  pub email:         Option<String>,
  #[serde(default)]
  pub phone_numbers: BTreeMap<String, String>,
}

impl NewContact {
  /// Check the parts of the schema serde cannot express.
  pub fn validate(&self) -> Result<()> {
    validate_email(self.email.as_deref())
  }
}

/// The `PUT /contacts/:id` body — a full contact including its `_id`.
///
/// Clients replaying a previously fetched record may echo the two server
/// timestamps; they are accepted but ignored. The store preserves the stored
/// `_createdAt` and assigns a fresh `_updatedAt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactReplacement {
  #[serde(rename = "_id")]
  pub id:            String,
  pub first_name:    String,
  pub last_name:     Option<String>,
  pub email:         Option<String>,
  #[serde(default)]
  pub phone_numbers: BTreeMap<String, String>,
  #[serde(rename = "_createdAt")]
  pub created_at:    Option<DateTime<Utc>>,
  #[serde(rename = "_updatedAt")]
  pub updated_at:    Option<DateTime<Utc>>,
}

impl ContactReplacement {
  pub fn validate(&self) -> Result<()> {
    validate_email(self.email.as_deref())
  }

  /// The client-writable fields, dropping `_id` and the echoed timestamps.
  pub fn into_input(self) -> NewContact {
    NewContact {
      first_name:    self.first_name,
      last_name:     self.last_name,
      email:         self.email,
      phone_numbers: self.phone_numbers,
    }
  }
}

fn validate_email(email: Option<&str>) -> Result<()> {
  if let Some(email) = email
    && (email.is_empty() || !email.contains('@'))
  {
    return Err(Error::InvalidEmail(email.to_owned()));
  }
  Ok(())
}

// ─── Public view ─────────────────────────────────────────────────────────────

/// The filtered projection of a [`Contact`] returned to HTTP clients.
///
/// The stored timestamps never appear. `email` is included only on direct
/// fetch-by-id; list, search, and insert responses redact it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
  #[serde(rename = "_id")]
  pub id:            String,
  pub first_name:    String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name:     Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email:         Option<String>,
  /// Always present; `{}` when the record has no phone numbers.
  pub phone_numbers: BTreeMap<String, String>,
}

impl ContactView {
  /// View for list, search, and insert responses. `email` is redacted.
  pub fn redacted(contact: &Contact) -> Self {
    Self::build(contact, false)
  }

  /// View for direct fetch-by-id. Includes `email` when set.
  pub fn detailed(contact: &Contact) -> Self {
    Self::build(contact, true)
  }

  fn build(contact: &Contact, include_email: bool) -> Self {
    Self {
      id:            contact.id.clone(),
      first_name:    contact.first_name.clone(),
      last_name:     contact.last_name.clone(),
      email:         if include_email { contact.email.clone() } else { None },
      phone_numbers: contact.phone_numbers.clone(),
    }
  }
}

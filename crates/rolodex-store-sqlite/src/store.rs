//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use rolodex_core::{
  contact::{Contact, NewContact},
  store::{ContactQuery, ContactStore},
};

use crate::{
  Error, Result,
  encode::{RawContact, encode_dt, encode_phone_numbers},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
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

/// Produce a globally-unique string id for a new record, independent of the
/// record's content.
fn generate_id() -> String { Uuid::new_v4().to_string() }

/// Map a `SELECT contact_id, first_name, last_name, email, phone_numbers,
/// created_at, updated_at` row into its raw form.
fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawContact> {
  Ok(RawContact {
    contact_id:    row.get(0)?,
    first_name:    row.get(1)?,
    last_name:     row.get(2)?,
    email:         row.get(3)?,
    phone_numbers: row.get(4)?,
    created_at:    row.get(5)?,
    updated_at:    row.get(6)?,
  })
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewContact) -> Result<Contact> {
    let now = Utc::now();
    let contact = Contact {
      id:            generate_id(),
      first_name:    input.first_name,
      last_name:     input.last_name,
      email:         input.email,
      phone_numbers: input.phone_numbers,
      created_at:    now,
      updated_at:    now,
    };

    let id_str     = contact.id.clone();
    let first_name = contact.first_name.clone();
    let last_name  = contact.last_name.clone();
    let email      = contact.email.clone();
    let phones_str = encode_phone_numbers(&contact.phone_numbers)?;
    let at_str     = encode_dt(now);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             contact_id, first_name, last_name, email,
             phone_numbers, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            first_name,
            last_name,
            email,
            phones_str,
            at_str,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(contact)
  }

  async fn find(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
    let term = query.term.clone();

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(t) = term {
          let mut stmt = conn.prepare(
            "SELECT contact_id, first_name, last_name, email,
                    phone_numbers, created_at, updated_at
             FROM contacts
             WHERE first_name = ?1 OR last_name = ?1 OR email = ?1
             ORDER BY first_name ASC",
          )?;
          stmt
            .query_map(rusqlite::params![t], row_to_raw)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(
            "SELECT contact_id, first_name, last_name, email,
                    phone_numbers, created_at, updated_at
             FROM contacts
             ORDER BY first_name ASC",
          )?;
          stmt
            .query_map([], row_to_raw)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<Contact>> {
    let id_str = id.to_owned();

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT contact_id, first_name, last_name, email,
                      phone_numbers, created_at, updated_at
               FROM contacts WHERE contact_id = ?1",
              rusqlite::params![id_str],
              row_to_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn replace(
    &self,
    id: &str,
    input: NewContact,
  ) -> Result<Option<Contact>> {
    let id_str     = id.to_owned();
    let first_name = input.first_name;
    let last_name  = input.last_name;
    let email      = input.email;
    let phones_str = encode_phone_numbers(&input.phone_numbers)?;
    let at_str     = encode_dt(Utc::now());

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        // created_at is not in the SET list; it survives every replace.
        let changed = conn.execute(
          "UPDATE contacts
           SET first_name = ?2, last_name = ?3, email = ?4,
               phone_numbers = ?5, updated_at = ?6
           WHERE contact_id = ?1",
          rusqlite::params![
            id_str, first_name, last_name, email, phones_str, at_str,
          ],
        )?;

        if changed == 0 {
          return Ok(None);
        }

        Ok(
          conn
            .query_row(
              "SELECT contact_id, first_name, last_name, email,
                      phone_numbers, created_at, updated_at
               FROM contacts WHERE contact_id = ?1",
              rusqlite::params![id_str],
              row_to_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn remove_by_id(&self, id: &str) -> Result<bool> {
    let id_str = id.to_owned();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE contact_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }
}

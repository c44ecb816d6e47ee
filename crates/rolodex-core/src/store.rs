//! The `ContactStore` trait and supporting query type.
//!
//! The trait is implemented by storage backends (e.g. `rolodex-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, NewContact};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`ContactStore::find`].
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
  /// Exact-match term compared against first name, last name, and email.
  /// `None` selects every contact.
  pub term: Option<String>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a contact store backend.
///
/// Each method is a single independent transaction against the store;
/// consistency across calls is the caller's concern. Concurrent writes to
/// the same id resolve last-writer-wins.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new contact. The store assigns the id and both timestamps;
  /// callers never supply them.
  fn insert(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// All contacts matching `query`, ordered ascending by first name.
  fn find<'a>(
    &'a self,
    query: &'a ContactQuery,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn find_by_id<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  /// Overwrite every client-writable field of an existing contact.
  ///
  /// `created_at` is preserved; `updated_at` is set to the current time.
  /// Never creates: returns `None` when no contact has this id.
  fn replace<'a>(
    &'a self,
    id: &'a str,
    input: NewContact,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  /// Delete a contact. Returns `false` when no contact had this id.
  fn remove_by_id<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;
}

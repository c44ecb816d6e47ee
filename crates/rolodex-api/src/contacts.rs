//! Handlers for the `/contacts` resource.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Optional `?query=<term>`, exact match |
//! | `POST`   | `/contacts` | Body: contact without `_id`; 201 + `Location` |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `PUT`    | `/contacts/:id` | Full replace; 204 + `X-Last-Update-Time` |
//! | `DELETE` | `/contacts/:id` | 204; a second delete of the same id is 404 |
//!
//! Every handler is the same three-stage pipeline: validate and transform the
//! input, invoke the store, transform the output.

use std::sync::Arc;

use axum::{
  extract::{Path, Query, State},
  http::{HeaderName, StatusCode, header},
  response::IntoResponse,
};
use rolodex_core::{
  contact::{ContactReplacement, ContactView, NewContact},
  store::{ContactQuery, ContactStore},
};
use serde::Deserialize;

use crate::error::{ApiError, Json};

/// Response header carrying the replaced record's previous `_updatedAt`.
/// Informational only; not a compare-and-swap precondition.
pub const LAST_UPDATE_TIME: HeaderName =
  HeaderName::from_static("x-last-update-time");

// ─── List / search ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Exact-match term compared against first name, last name, and email.
  /// Absent means "list everything".
  pub query: Option<String>,
}

/// `GET /contacts[?query=<term>]` — the full matching set, sorted ascending
/// by first name, `email` redacted from every element. No pagination; the
/// dataset is expected to stay small.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<ContactView>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = ContactQuery { term: params.query };

  let contacts = store
    .find(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(contacts.iter().map(ContactView::redacted).collect()))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /contacts` — body: a contact without `_id` (the server assigns it).
/// 201 with the redacted view and a `Location` header on success.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body
    .validate()
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let contact = store
    .insert(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let location = format!("/contacts/{}", contact.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(ContactView::redacted(&contact)),
  ))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /contacts/:id` — the detailed view, including `email` when set.
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<ContactView>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contact = store
    .find_by_id(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;

  Ok(Json(ContactView::detailed(&contact)))
}

// ─── Replace ─────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — body: a full contact including `_id`.
///
/// Never creates: an unknown id is a 404. On success the response is empty
/// and carries the previous `_updatedAt` in `X-Last-Update-Time`.
pub async fn replace<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(body): Json<ContactReplacement>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body
    .validate()
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  if body.id != id {
    return Err(ApiError::BadRequest(format!(
      "body _id {:?} does not match path id {id:?}",
      body.id
    )));
  }

  let existing = store
    .find_by_id(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  let previous_update = existing.updated_at;

  // A concurrent delete can still win between the fetch and the write; the
  // store reports that as None.
  store
    .replace(&id, body.into_input())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;

  Ok((
    StatusCode::NO_CONTENT,
    [(LAST_UPDATE_TIME, previous_update.to_rfc3339())],
  ))
}

// ─── Remove ──────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id` — 204 on success. Deletion is not idempotent at
/// the status level: a second delete of the same id is a 404.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let removed = store
    .remove_by_id(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if !removed {
    return Err(ApiError::NotFound(format!("contact {id} not found")));
  }
  Ok(StatusCode::NO_CONTENT)
}

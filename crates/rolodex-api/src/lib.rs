//! JSON REST API for the rolodex contact service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rolodex_core::store::ContactStore`], plus the [`ServerConfig`] the
//! server binary is wired with. TLS and transport concerns are the caller's
//! responsibility.

pub mod contacts;
pub mod error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use rolodex_core::store::ContactStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// under `ROLODEX_*` environment variables. Read once at startup; no
/// hot-reload.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Path to the SQLite database file backing the contact store
  /// (`ROLODEX_STORE_PATH`).
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 9900 }

fn default_store_path() -> PathBuf { PathBuf::from("contacts.db") }

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The route table below is the complete capability surface. Bulk update and
/// bulk delete on the collection root, and partial-field updates on single
/// records, are not routed; axum's method router answers them with 405.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::replace::<S>)
        .delete(contacts::remove::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────

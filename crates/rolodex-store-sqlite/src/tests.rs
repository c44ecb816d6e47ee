//! Integration tests for `SqliteStore` against an in-memory database.

use std::collections::BTreeMap;

use rolodex_core::{
  contact::NewContact,
  store::{ContactQuery, ContactStore},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn contact(first: &str, last: &str, email: &str) -> NewContact {
  NewContact {
    first_name:    first.to_owned(),
    last_name:     Some(last.to_owned()),
    email:         Some(email.to_owned()),
    phone_numbers: BTreeMap::new(),
  }
}

fn query(term: &str) -> ContactQuery {
  ContactQuery { term: Some(term.to_owned()) }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_timestamps() {
  let s = store().await;

  let stored = s
    .insert(contact("Mary", "Smith", "mary@smith.com"))
    .await
    .unwrap();

  assert!(!stored.id.is_empty());
  assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn insert_assigns_distinct_ids() {
  let s = store().await;

  let a = s.insert(contact("A", "A", "a@example.com")).await.unwrap();
  let b = s.insert(contact("B", "B", "b@example.com")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn insert_then_find_by_id_round_trips() {
  let s = store().await;

  let mut input = contact("Mary", "Smith", "mary@smith.com");
  input
    .phone_numbers
    .insert("mobile".to_owned(), "415-555-5555".to_owned());

  let stored = s.insert(input).await.unwrap();
  let fetched = s.find_by_id(&stored.id).await.unwrap().unwrap();

  assert_eq!(fetched, stored);
  assert_eq!(
    fetched.phone_numbers.get("mobile").map(String::as_str),
    Some("415-555-5555")
  );
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  let result = s.find_by_id("no-such-id").await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn optional_fields_round_trip_as_none() {
  let s = store().await;

  let input = NewContact {
    first_name:    "Solo".to_owned(),
    last_name:     None,
    email:         None,
    phone_numbers: BTreeMap::new(),
  };

  let stored = s.insert(input).await.unwrap();
  let fetched = s.find_by_id(&stored.id).await.unwrap().unwrap();

  assert!(fetched.last_name.is_none());
  assert!(fetched.email.is_none());
  assert!(fetched.phone_numbers.is_empty());
}

// ─── Find ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_all_sorted_by_first_name() {
  let s = store().await;

  s.insert(contact("Carol", "Jones", "carol@example.com"))
    .await
    .unwrap();
  s.insert(contact("Alice", "Smith", "alice@example.com"))
    .await
    .unwrap();
  s.insert(contact("Bob", "Brown", "bob@example.com"))
    .await
    .unwrap();

  let all = s.find(&ContactQuery::default()).await.unwrap();
  let firsts: Vec<_> = all.iter().map(|c| c.first_name.as_str()).collect();
  assert_eq!(firsts, ["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn find_term_matches_each_field() {
  let s = store().await;

  let mary = s
    .insert(contact("Mary", "Smith", "mary@smith.com"))
    .await
    .unwrap();
  s.insert(contact("Bob", "Brown", "bob@example.com"))
    .await
    .unwrap();

  for term in ["Mary", "Smith", "mary@smith.com"] {
    let hits = s.find(&query(term)).await.unwrap();
    assert_eq!(hits.len(), 1, "term {term:?}");
    assert_eq!(hits[0].id, mary.id);
  }
}

#[tokio::test]
async fn find_term_is_exact_not_substring() {
  let s = store().await;

  s.insert(contact("Mary", "Smith", "mary@smith.com"))
    .await
    .unwrap();

  assert!(s.find(&query("Mar")).await.unwrap().is_empty());
  assert!(s.find(&query("mary@smith")).await.unwrap().is_empty());
}

#[tokio::test]
async fn find_term_results_sorted_by_first_name() {
  let s = store().await;

  s.insert(contact("Zoe", "Smith", "zoe@example.com"))
    .await
    .unwrap();
  s.insert(contact("Amy", "Smith", "amy@example.com"))
    .await
    .unwrap();

  let hits = s.find(&query("Smith")).await.unwrap();
  let firsts: Vec<_> = hits.iter().map(|c| c.first_name.as_str()).collect();
  assert_eq!(firsts, ["Amy", "Zoe"]);
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_fields_and_bumps_updated_at() {
  let s = store().await;

  let stored = s
    .insert(contact("Mary", "Smith", "mary@smith.com"))
    .await
    .unwrap();

  let replaced = s
    .replace(&stored.id, contact("Mary", "Jones", "mary@jones.com"))
    .await
    .unwrap()
    .unwrap();

  assert_eq!(replaced.id, stored.id);
  assert_eq!(replaced.last_name.as_deref(), Some("Jones"));
  assert_eq!(replaced.email.as_deref(), Some("mary@jones.com"));
  assert_eq!(replaced.created_at, stored.created_at);
  assert!(replaced.updated_at > stored.updated_at);
}

#[tokio::test]
async fn replace_missing_returns_none_and_creates_nothing() {
  let s = store().await;

  let result = s
    .replace("no-such-id", contact("Ghost", "Nobody", "ghost@example.com"))
    .await
    .unwrap();
  assert!(result.is_none());

  let all = s.find(&ContactQuery::default()).await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn replace_can_clear_optional_fields() {
  let s = store().await;

  let stored = s
    .insert(contact("Mary", "Smith", "mary@smith.com"))
    .await
    .unwrap();

  let replaced = s
    .replace(&stored.id, NewContact {
      first_name:    "Mary".to_owned(),
      last_name:     None,
      email:         None,
      phone_numbers: BTreeMap::new(),
    })
    .await
    .unwrap()
    .unwrap();

  assert!(replaced.last_name.is_none());
  assert!(replaced.email.is_none());
}

// ─── Remove ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_returns_true_then_false() {
  let s = store().await;

  let stored = s
    .insert(contact("Mary", "Smith", "mary@smith.com"))
    .await
    .unwrap();

  assert!(s.remove_by_id(&stored.id).await.unwrap());
  assert!(!s.remove_by_id(&stored.id).await.unwrap());
  assert!(s.find_by_id(&stored.id).await.unwrap().is_none());
}

#[tokio::test]
async fn remove_missing_returns_false() {
  let s = store().await;
  assert!(!s.remove_by_id("no-such-id").await.unwrap());
}

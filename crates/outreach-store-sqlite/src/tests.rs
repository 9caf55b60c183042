//! Integration tests for `SqliteSenderStore` against an in-memory database.

use outreach_core::sender::SenderStore;

use crate::{Error, SqliteSenderStore};

async fn store() -> SqliteSenderStore {
  SqliteSenderStore::open_in_memory()
    .await
    .expect("in-memory store")
}

#[tokio::test]
async fn record_and_list_sender() {
  let s = store().await;

  let record = s.record_sender("me@gmail.com").await.unwrap();
  assert_eq!(record.address, "me@gmail.com");

  let all = s.list_senders().await.unwrap();
  assert_eq!(all, vec![record]);
}

#[tokio::test]
async fn recording_is_append_only() {
  let s = store().await;
  let first = s.record_sender("me@gmail.com").await.unwrap();
  let second = s.record_sender("me@gmail.com").await.unwrap();
  s.record_sender("other@gmail.com").await.unwrap();

  assert_ne!(first.sender_id, second.sender_id);
  let all = s.list_senders().await.unwrap();
  let addresses: Vec<&str> = all.iter().map(|r| r.address.as_str()).collect();
  assert_eq!(addresses, ["me@gmail.com", "me@gmail.com", "other@gmail.com"]);
}

#[tokio::test]
async fn address_is_trimmed() {
  let s = store().await;
  let record = s.record_sender("  me@gmail.com \n").await.unwrap();
  assert_eq!(record.address, "me@gmail.com");
}

#[tokio::test]
async fn empty_address_is_rejected() {
  let s = store().await;
  assert!(matches!(s.record_sender("   ").await, Err(Error::EmptyAddress)));
  assert!(s.list_senders().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_senders().await.unwrap().is_empty());
}

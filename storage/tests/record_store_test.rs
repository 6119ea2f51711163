//! Integration tests for [`storage::RecordStore`] and its repositories.
//!
//! Covers round-trip echo, insertion-order listing, list idempotence, and the
//! 1000-row list cap using an in-memory SQLite database.

use chrono::Utc;
use standeal_core::{ContactMessage, StatusCheck, TransportQuote, TransportType, Urgency};
use storage::RecordStore;
use uuid::Uuid;

fn sample_quote(client_name: &str) -> TransportQuote {
    TransportQuote {
        id: Uuid::new_v4().to_string(),
        client_name: client_name.to_string(),
        email: "ion@example.com".to_string(),
        phone: "068123456".to_string(),
        pickup_location: "Chișinău".to_string(),
        delivery_location: "Iași".to_string(),
        cargo_type: "electronics".to_string(),
        cargo_weight: Some(120.5),
        cargo_dimensions: Some("2x1x1m".to_string()),
        transport_type: TransportType::International,
        urgency: Urgency::Urgent,
        additional_info: None,
        timestamp: Utc::now(),
    }
}

/// **Test: A stored quote comes back field-for-field in the list.**
///
/// **Setup:** In-memory DB; insert one quote with all fields set.
/// **Action:** `quotes.list()`.
/// **Expected:** One record, equal to the inserted one on every field.
#[tokio::test]
async fn quote_round_trip() {
    let store = RecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to connect store");

    let quote = sample_quote("Ion Popescu");
    store.quotes.insert(&quote).await.expect("Failed to insert");

    let listed = store.quotes.list().await.expect("Failed to list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], quote);
}

/// **Test: Listing preserves insertion order.**
///
/// **Setup:** Insert five quotes with distinct client names.
/// **Action:** `quotes.list()`.
/// **Expected:** Client names come back in the order they were inserted.
#[tokio::test]
async fn quote_list_is_in_insertion_order() {
    let store = RecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to connect store");

    for i in 0..5 {
        store
            .quotes
            .insert(&sample_quote(&format!("Client {}", i)))
            .await
            .expect("Failed to insert");
    }

    let listed = store.quotes.list().await.expect("Failed to list");
    let names: Vec<&str> = listed.iter().map(|q| q.client_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Client 0", "Client 1", "Client 2", "Client 3", "Client 4"]
    );
}

/// **Test: Listing twice with no intervening writes returns identical results.**
///
/// **Setup:** Insert three quotes.
/// **Action:** `quotes.list()` twice.
/// **Expected:** Both calls return the same ordered records.
#[tokio::test]
async fn quote_list_is_idempotent() {
    let store = RecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to connect store");

    for i in 0..3 {
        store
            .quotes
            .insert(&sample_quote(&format!("Client {}", i)))
            .await
            .expect("Failed to insert");
    }

    let first = store.quotes.list().await.expect("Failed to list");
    let second = store.quotes.list().await.expect("Failed to list");
    assert_eq!(first, second);
}

/// **Test: List truncates to the first 1000 records in storage order.**
///
/// **Setup:** Insert 1003 status checks.
/// **Action:** `status.list()`.
/// **Expected:** Exactly 1000 records, starting with the first inserted.
#[tokio::test]
async fn status_list_caps_at_1000() {
    let store = RecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to connect store");

    for i in 0..1003 {
        store
            .status
            .insert(&StatusCheck::new(format!("client-{}", i)))
            .await
            .expect("Failed to insert");
    }

    let listed = store.status.list().await.expect("Failed to list");
    assert_eq!(listed.len(), 1000);
    assert_eq!(listed[0].client_name, "client-0");
    assert_eq!(listed[999].client_name, "client-999");
}

/// **Test: Contact messages persist optional fields as stored.**
///
/// **Setup:** Insert one contact message without a phone number.
/// **Action:** `contacts.list()`.
/// **Expected:** One record with `phone == None` and all other fields intact.
#[tokio::test]
async fn contact_round_trip_without_phone() {
    let store = RecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to connect store");

    let contact = ContactMessage {
        id: Uuid::new_v4().to_string(),
        name: "Maria".to_string(),
        email: "maria@example.com".to_string(),
        phone: None,
        subject: "Întrebare".to_string(),
        message: "Bună ziua, am o întrebare.".to_string(),
        timestamp: Utc::now(),
    };
    store
        .contacts
        .insert(&contact)
        .await
        .expect("Failed to insert");

    let listed = store.contacts.list().await.expect("Failed to list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], contact);
}

/// **Test: Empty tables list as empty, not as an error.**
///
/// **Setup:** Freshly connected in-memory DB.
/// **Action:** List all three kinds.
/// **Expected:** Three empty vectors.
#[tokio::test]
async fn empty_lists_are_ok() {
    let store = RecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to connect store");

    assert!(store.quotes.list().await.expect("list quotes").is_empty());
    assert!(store.contacts.list().await.expect("list contacts").is_empty());
    assert!(store.status.list().await.expect("list status").is_empty());
}

//! Contract tests for the persistence gateway, run against both storage
//! engines. Run with: cargo test --test gateway_tests

use std::sync::Arc;

use duelhub::gateway::{DurableGateway, MemoryGateway, PersistenceGateway};
use duelhub::GatewayError;
use tempfile::TempDir;

fn memory() -> Arc<dyn PersistenceGateway> {
    Arc::new(MemoryGateway::new())
}

fn durable(dir: &TempDir) -> Arc<dyn PersistenceGateway> {
    Arc::new(DurableGateway::open(dir.path()).expect("durable backend should open"))
}

async fn registration_is_case_insensitive(gateway: Arc<dyn PersistenceGateway>) {
    gateway.create_user("Alice").await.unwrap();
    let err = gateway.create_user("ALICE").await.unwrap_err();
    assert!(matches!(err, GatewayError::AlreadyExists(_)));

    let resolved = gateway.get_user("aLiCe").await.unwrap();
    assert_eq!(resolved.username, "alice");
}

async fn deck_lifecycle(gateway: Arc<dyn PersistenceGateway>) {
    let user = gateway.create_user("bob").await.unwrap();

    let deck = gateway.create_deck(&user.id, "Burn").await.unwrap();
    assert!(deck.cards.is_empty());

    let updated = gateway
        .replace_cards(&deck.id, &[1, 2, 2, 3])
        .await
        .unwrap()
        .expect("deck exists");
    assert_eq!(updated.cards, vec![1, 2, 2, 3]);

    let renamed = gateway
        .rename_deck(&deck.id, "Burn v2")
        .await
        .unwrap()
        .expect("deck exists");
    assert_eq!(renamed.name, "Burn v2");
    assert_eq!(renamed.cards, vec![1, 2, 2, 3]);

    let decks = gateway.list_decks_by_user(&user.id).await.unwrap();
    assert_eq!(decks.len(), 1);

    gateway.delete_deck(&deck.id).await.unwrap();
    // Idempotent: deleting again is fine.
    gateway.delete_deck(&deck.id).await.unwrap();
    assert!(gateway.get_deck(&deck.id).await.unwrap().is_none());
}

async fn absent_deck_updates_are_noops(gateway: Arc<dyn PersistenceGateway>) {
    assert!(gateway.rename_deck("missing", "x").await.unwrap().is_none());
    assert!(gateway
        .replace_cards("missing", &[1])
        .await
        .unwrap()
        .is_none());
    gateway.delete_deck("missing").await.unwrap();
}

async fn copy_deck_semantics(gateway: Arc<dyn PersistenceGateway>) {
    let alice = gateway.create_user("alice").await.unwrap();
    gateway.create_user("bob").await.unwrap();

    let source = gateway.create_deck(&alice.id, "Control").await.unwrap();
    gateway
        .replace_cards(&source.id, &[10, 20, 30])
        .await
        .unwrap();

    let copy = gateway.copy_deck(&source.id, "bob", None).await.unwrap();
    assert_ne!(copy.id, source.id);
    assert_eq!(copy.name, "Control");
    assert_eq!(copy.cards, vec![10, 20, 30]);

    // The copy is an independent sequence.
    gateway.replace_cards(&copy.id, &[99]).await.unwrap();
    let source_after = gateway.get_deck(&source.id).await.unwrap().unwrap();
    assert_eq!(source_after.cards, vec![10, 20, 30]);

    let attributed = gateway
        .copy_deck(&source.id, "bob", Some("alice"))
        .await
        .unwrap();
    assert_eq!(attributed.name, "Control (alice)");

    let missing_source = gateway.copy_deck("missing", "bob", None).await.unwrap_err();
    assert!(matches!(missing_source, GatewayError::NotFound(_)));
    let missing_target = gateway.copy_deck(&source.id, "eve", None).await.unwrap_err();
    assert!(matches!(missing_target, GatewayError::NotFound(_)));
}

async fn register_build_copy_scenario(gateway: Arc<dyn PersistenceGateway>) {
    let alice = gateway.create_user("Alice").await.unwrap();
    let deck = gateway.create_deck(&alice.id, "Control").await.unwrap();
    gateway.replace_cards(&deck.id, &[1, 2, 3]).await.unwrap();

    let backup = gateway.copy_deck(&deck.id, "Alice", None).await.unwrap();

    let decks = gateway.list_decks_by_user(&alice.id).await.unwrap();
    assert_eq!(decks.len(), 2);
    assert_eq!(decks[1].cards, vec![1, 2, 3]);
    assert_ne!(decks[1].id, deck.id);
    assert_eq!(decks[1].id, backup.id);
}

#[tokio::test]
async fn memory_registration_is_case_insensitive() {
    registration_is_case_insensitive(memory()).await;
}

#[tokio::test]
async fn durable_registration_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    registration_is_case_insensitive(durable(&dir)).await;
}

#[tokio::test]
async fn memory_deck_lifecycle() {
    deck_lifecycle(memory()).await;
}

#[tokio::test]
async fn durable_deck_lifecycle() {
    let dir = TempDir::new().unwrap();
    deck_lifecycle(durable(&dir)).await;
}

#[tokio::test]
async fn memory_absent_deck_updates_are_noops() {
    absent_deck_updates_are_noops(memory()).await;
}

#[tokio::test]
async fn durable_absent_deck_updates_are_noops() {
    let dir = TempDir::new().unwrap();
    absent_deck_updates_are_noops(durable(&dir)).await;
}

#[tokio::test]
async fn memory_copy_deck_semantics() {
    copy_deck_semantics(memory()).await;
}

#[tokio::test]
async fn durable_copy_deck_semantics() {
    let dir = TempDir::new().unwrap();
    copy_deck_semantics(durable(&dir)).await;
}

#[tokio::test]
async fn memory_register_build_copy_scenario() {
    register_build_copy_scenario(memory()).await;
}

#[tokio::test]
async fn durable_register_build_copy_scenario() {
    let dir = TempDir::new().unwrap();
    register_build_copy_scenario(durable(&dir)).await;
}

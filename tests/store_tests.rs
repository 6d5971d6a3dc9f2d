//! Session-store behavior tests: optimistic mutation, fire-and-forget
//! write-back, session restore. Run with: cargo test --test store_tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use duelhub::client::{CardSource, Session};
use duelhub::core::{Result as GatewayResult, YugiohCard};
use duelhub::gateway::PersistenceGateway;
use duelhub::{GatewayError, MemoryGateway};
use tempfile::TempDir;

struct StaticCards(Vec<YugiohCard>);

#[async_trait]
impl CardSource for StaticCards {
    async fn fetch_all(&self) -> GatewayResult<Vec<YugiohCard>> {
        Ok(self.0.clone())
    }
}

struct FailingCards;

#[async_trait]
impl CardSource for FailingCards {
    async fn fetch_all(&self) -> GatewayResult<Vec<YugiohCard>> {
        Err(GatewayError::Backend("catalog unavailable".to_string()))
    }
}

fn sample_card(id: u32, name: &str) -> YugiohCard {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "desc": "",
        "type": "Normal Monster",
        "card_images": [],
    }))
    .unwrap()
}

struct Harness {
    session: Session,
    gateway: Arc<MemoryGateway>,
    _data_dir: TempDir,
}

fn harness() -> Harness {
    let gateway = Arc::new(MemoryGateway::new());
    let cards = Arc::new(StaticCards(vec![
        sample_card(1, "Kuriboh"),
        sample_card(2, "Sangan"),
    ]));
    let data_dir = TempDir::new().unwrap();
    let session = Session::new(gateway.clone(), cards, data_dir.path().to_path_buf());
    Harness {
        session,
        gateway,
        _data_dir: data_dir,
    }
}

/// Polls the backend until the deck's remote card list matches.
async fn wait_for_remote_cards(gateway: &MemoryGateway, deck_id: &str, expected: &[u32]) {
    for _ in 0..200 {
        let deck = gateway.get_deck(deck_id).await.unwrap();
        if deck.map(|d| d.cards == expected).unwrap_or(false) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("remote cards never became {expected:?}");
}

#[tokio::test]
async fn catalog_is_fetched_once() {
    let h = harness();
    h.session.decks.ensure_catalog().await;
    assert_eq!(h.session.decks.all_cards().len(), 2);
    // Second call is a no-op against the cached list.
    h.session.decks.ensure_catalog().await;
    assert_eq!(h.session.decks.all_cards().len(), 2);
}

#[tokio::test]
async fn failed_catalog_fetch_leaves_cache_empty() {
    let gateway = Arc::new(MemoryGateway::new());
    let data_dir = TempDir::new().unwrap();
    let session = Session::new(gateway, Arc::new(FailingCards), data_dir.path().to_path_buf());
    session.decks.ensure_catalog().await;
    assert!(session.decks.all_cards().is_empty());
}

#[tokio::test]
async fn card_mutations_are_optimistic_and_reach_the_backend() {
    let h = harness();
    h.session.users.add_user("alice").await.unwrap();
    let deck_id = h.session.decks.add_deck("Control").await.unwrap();
    h.session.decks.select_deck(Some(deck_id.clone()));

    h.session.decks.add_card_to_deck(1);
    h.session.decks.add_card_to_deck(2);
    h.session.decks.add_card_to_deck(3);

    // The local view updates before any remote write resolves.
    assert_eq!(
        h.session.decks.selected_deck().unwrap().cards,
        vec![1, 2, 3]
    );

    wait_for_remote_cards(&h.gateway, &deck_id, &[1, 2, 3]).await;
}

#[tokio::test]
async fn add_then_remove_restores_the_sequence() {
    let h = harness();
    h.session.users.add_user("alice").await.unwrap();
    let deck_id = h.session.decks.add_deck("Control").await.unwrap();
    h.session.decks.select_deck(Some(deck_id));

    h.session.decks.add_card_to_deck(1);
    h.session.decks.add_card_to_deck(2);
    let before = h.session.decks.selected_deck().unwrap().cards;

    h.session.decks.add_card_to_deck(9);
    h.session.decks.remove_card_from_deck(9);

    assert_eq!(h.session.decks.selected_deck().unwrap().cards, before);
}

#[tokio::test]
async fn remove_deletes_only_the_first_occurrence() {
    let h = harness();
    h.session.users.add_user("alice").await.unwrap();
    let deck_id = h.session.decks.add_deck("Control").await.unwrap();
    h.session.decks.select_deck(Some(deck_id));

    h.session.decks.add_card_to_deck(5);
    h.session.decks.add_card_to_deck(7);
    h.session.decks.add_card_to_deck(5);

    h.session.decks.remove_card_from_deck(5);
    assert_eq!(h.session.decks.selected_deck().unwrap().cards, vec![7, 5]);

    // Removing a card that is not in the deck is a no-op.
    h.session.decks.remove_card_from_deck(42);
    assert_eq!(h.session.decks.selected_deck().unwrap().cards, vec![7, 5]);
}

#[tokio::test]
async fn copy_deck_duplicates_the_selected_deck() {
    let h = harness();
    h.session.users.add_user("Alice").await.unwrap();
    let deck_id = h.session.decks.add_deck("Control").await.unwrap();
    h.session.decks.select_deck(Some(deck_id.clone()));

    h.session.decks.add_card_to_deck(1);
    h.session.decks.add_card_to_deck(2);
    h.session.decks.add_card_to_deck(3);

    let backup_id = h.session.decks.copy_deck("Control Backup").await.unwrap();
    assert_ne!(backup_id, deck_id);

    let decks = h.session.decks.decks();
    assert_eq!(decks.len(), 2);
    let backup = decks.iter().find(|d| d.id == backup_id).unwrap();
    assert_eq!(backup.name, "Control Backup");
    assert_eq!(backup.cards, vec![1, 2, 3]);
}

#[tokio::test]
async fn failed_fire_and_forget_write_is_observable() {
    let h = harness();
    h.session.users.add_user("alice").await.unwrap();
    let deck_id = h.session.decks.add_deck("Control").await.unwrap();
    h.session.decks.select_deck(Some(deck_id.clone()));

    // No such target user; the copy fails remotely while the UI moves on.
    h.session.decks.share_deck("nobody");

    let mut failure = None;
    for _ in 0..200 {
        if let Some(found) = h.session.next_write_failure() {
            failure = Some(found);
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let failure = failure.expect("write failure should be recorded");
    assert_eq!(failure.operation, "share-deck");
    assert_eq!(failure.deck_id, deck_id);
    assert!(matches!(failure.error, GatewayError::NotFound(_)));
}

#[tokio::test]
async fn ensure_decks_only_fetches_cold() {
    let h = harness();
    let user = h.session.users.add_user("alice").await.unwrap();
    h.session.decks.add_deck("Control").await.unwrap();

    // A deck created behind the store's back is not picked up by the guard.
    h.gateway.create_deck(&user.id, "Hidden").await.unwrap();
    h.session.decks.ensure_decks().await.unwrap();
    assert_eq!(h.session.decks.decks().len(), 1);

    // An explicit refresh sees it.
    h.session.decks.refresh_decks().await.unwrap();
    assert_eq!(h.session.decks.decks().len(), 2);
}

#[tokio::test]
async fn duplicate_registration_propagates_to_the_caller() {
    let h = harness();
    h.session.users.add_user("alice").await.unwrap();
    let err = h.session.users.add_user("ALICE").await.unwrap_err();
    assert!(matches!(err, GatewayError::AlreadyExists(_)));
}

#[tokio::test]
async fn login_existing_restores_the_saved_session() {
    let gateway = Arc::new(MemoryGateway::new());
    let cards = Arc::new(StaticCards(vec![]));
    let data_dir = TempDir::new().unwrap();

    let first = Session::new(
        gateway.clone(),
        cards.clone(),
        data_dir.path().to_path_buf(),
    );
    first.users.add_user("carol").await.unwrap();
    drop(first);

    let second = Session::new(gateway, cards, data_dir.path().to_path_buf());
    assert!(second.users.current().is_none());
    second.users.login_existing().await;
    let user = second.users.current().expect("session should be restored");
    assert_eq!(user.username, "carol");
}

#[tokio::test]
async fn login_existing_with_no_saved_session_is_a_noop() {
    let h = harness();
    h.session.users.login_existing().await;
    assert!(h.session.users.current().is_none());
}

#[tokio::test]
async fn deck_operations_require_a_session() {
    let h = harness();
    let err = h.session.decks.add_deck("Control").await.unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
}

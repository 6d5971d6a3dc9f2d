use std::future::Future;
use std::sync::{Arc, RwLock};

use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use super::catalog::CardSource;
use super::session::WriteFailure;
use super::user_store::UserStore;
use crate::core::{CardId, Deck, GatewayError, Result, YugiohCard};
use crate::gateway::PersistenceGateway;

#[derive(Debug, Default)]
struct DeckState {
    all_cards: Vec<YugiohCard>,
    decks: Vec<Deck>,
    selected_deck_id: Option<String>,
    adding_deck: bool,
    deleting_deck: Option<String>,
}

/// Client-resident authoritative cache of the current user's decks and the
/// card catalog.
///
/// Card add/remove, rename, and share apply their local mutation first and
/// push the remote write as a detached task; the UI never waits on, or rolls
/// back from, those writes. Failures land on the session's write-failure
/// channel.
pub struct DeckStore {
    gateway: Arc<dyn PersistenceGateway>,
    cards: Arc<dyn CardSource>,
    users: Arc<UserStore>,
    state: Arc<RwLock<DeckState>>,
    failures: UnboundedSender<WriteFailure>,
}

impl DeckStore {
    pub(crate) fn new(
        gateway: Arc<dyn PersistenceGateway>,
        cards: Arc<dyn CardSource>,
        users: Arc<UserStore>,
        failures: UnboundedSender<WriteFailure>,
    ) -> Self {
        Self {
            gateway,
            cards,
            users,
            state: Arc::new(RwLock::new(DeckState::default())),
            failures,
        }
    }

    // ---- catalog ----

    /// Fetches the card catalog once per session. A failed fetch is logged
    /// and leaves the cache empty, so a later call retries.
    pub async fn ensure_catalog(&self) {
        let cached = self
            .state
            .read()
            .map(|s| !s.all_cards.is_empty())
            .unwrap_or(false);
        if cached {
            return;
        }
        match self.cards.fetch_all().await {
            Ok(all) => {
                if let Ok(mut state) = self.state.write() {
                    state.all_cards = all;
                }
            }
            Err(error) => warn!(%error, "could not fetch card catalog"),
        }
    }

    pub fn all_cards(&self) -> Vec<YugiohCard> {
        self.state
            .read()
            .map(|s| s.all_cards.clone())
            .unwrap_or_default()
    }

    // ---- deck list ----

    /// Cold-start guard: fetches the deck list only when the cache is empty.
    pub async fn ensure_decks(&self) -> Result<()> {
        let empty = self.state.read().map(|s| s.decks.is_empty()).unwrap_or(true);
        if empty {
            self.refresh_decks().await?;
        }
        Ok(())
    }

    /// Replaces the whole cached list with the backend's view.
    pub async fn refresh_decks(&self) -> Result<()> {
        let user = self.current_user_id()?;
        let decks = self.gateway.list_decks_by_user(&user).await?;
        if let Ok(mut state) = self.state.write() {
            state.decks = decks;
        }
        Ok(())
    }

    pub fn decks(&self) -> Vec<Deck> {
        self.state.read().map(|s| s.decks.clone()).unwrap_or_default()
    }

    pub fn adding_deck(&self) -> bool {
        self.state.read().map(|s| s.adding_deck).unwrap_or(false)
    }

    pub fn deleting_deck(&self) -> Option<String> {
        self.state.read().ok()?.deleting_deck.clone()
    }

    // ---- selection ----

    pub fn select_deck(&self, deck_id: Option<String>) {
        if let Ok(mut state) = self.state.write() {
            state.selected_deck_id = deck_id;
        }
    }

    pub fn selected_deck_id(&self) -> Option<String> {
        self.state.read().ok()?.selected_deck_id.clone()
    }

    pub fn selected_deck(&self) -> Option<Deck> {
        let state = self.state.read().ok()?;
        let id = state.selected_deck_id.as_deref()?;
        state.decks.iter().find(|d| d.id == id).cloned()
    }

    // ---- awaited mutations ----

    /// Persists a new empty deck, refreshes the list, and returns its id.
    pub async fn add_deck(&self, name: &str) -> Result<String> {
        let user = self.current_user_id()?;
        self.set_adding(true);
        let result = async {
            let deck = self.gateway.create_deck(&user, name).await?;
            self.refresh_decks().await?;
            Ok(deck.id)
        }
        .await;
        self.set_adding(false);
        result
    }

    /// Removes the currently selected deck and refreshes the list.
    pub async fn remove_deck(&self) -> Result<()> {
        let deck_id = self.require_selected()?;
        if let Ok(mut state) = self.state.write() {
            state.deleting_deck = Some(deck_id.clone());
        }
        let result = async {
            self.gateway.delete_deck(&deck_id).await?;
            if let Ok(mut state) = self.state.write() {
                if state.selected_deck_id.as_deref() == Some(deck_id.as_str()) {
                    state.selected_deck_id = None;
                }
            }
            self.refresh_decks().await
        }
        .await;
        if let Ok(mut state) = self.state.write() {
            state.deleting_deck = None;
        }
        result
    }

    /// Copies the selected deck under a new name: create, bulk-replace the
    /// cards when the source has any, refresh. The steps are not
    /// transactional; a failure after the create leaves an empty deck.
    pub async fn copy_deck(&self, new_name: &str) -> Result<String> {
        let source = self
            .selected_deck()
            .ok_or_else(|| GatewayError::validation("no deck selected"))?;
        let user = self.current_user_id()?;

        let copy = self.gateway.create_deck(&user, new_name).await?;
        if !source.cards.is_empty() {
            self.gateway.replace_cards(&copy.id, &source.cards).await?;
        }
        self.refresh_decks().await?;
        Ok(copy.id)
    }

    // ---- optimistic, fire-and-forget mutations ----

    /// Appends a card locally and ships the full replacement array without
    /// waiting for the result.
    pub fn add_card_to_deck(&self, card_id: CardId) {
        let Some((deck_id, cards)) = self.mutate_selected_cards(|cards| cards.push(card_id))
        else {
            return;
        };
        let gateway = Arc::clone(&self.gateway);
        self.spawn_write("add-card-to-deck", deck_id.clone(), async move {
            gateway.replace_cards(&deck_id, &cards).await.map(|_| ())
        });
    }

    /// Removes the first occurrence of the card locally and ships the full
    /// replacement array. A card that is not in the deck is a no-op.
    pub fn remove_card_from_deck(&self, card_id: CardId) {
        let mut removed = false;
        let Some((deck_id, cards)) = self.mutate_selected_cards(|cards| {
            if let Some(position) = cards.iter().position(|c| *c == card_id) {
                cards.remove(position);
                removed = true;
            }
        }) else {
            return;
        };
        if !removed {
            return;
        }
        let gateway = Arc::clone(&self.gateway);
        self.spawn_write("remove-card-from-deck", deck_id.clone(), async move {
            gateway.replace_cards(&deck_id, &cards).await.map(|_| ())
        });
    }

    /// Renames the selected deck locally and ships the rename.
    pub fn change_deck_name(&self, name: &str) {
        let Some(deck_id) = self.selected_deck_id() else {
            return;
        };
        if let Ok(mut state) = self.state.write() {
            if let Some(deck) = state.decks.iter_mut().find(|d| d.id == deck_id) {
                deck.name = name.to_string();
            }
        }
        let gateway = Arc::clone(&self.gateway);
        let name = name.to_string();
        self.spawn_write("edit-deck-name", deck_id.clone(), async move {
            gateway.rename_deck(&deck_id, &name).await.map(|_| ())
        });
    }

    /// Copies the selected deck to another user, attributed to the current
    /// user. Fire-and-forget; the target refetches to see it.
    pub fn share_deck(&self, target_username: &str) {
        let Some(deck_id) = self.selected_deck_id() else {
            return;
        };
        let attribution = self.users.current().map(|u| u.username);
        let gateway = Arc::clone(&self.gateway);
        let target = target_username.to_string();
        self.spawn_write("share-deck", deck_id.clone(), async move {
            gateway
                .copy_deck(&deck_id, &target, attribution.as_deref())
                .await
                .map(|_| ())
        });
    }

    // ---- internals ----

    fn current_user_id(&self) -> Result<String> {
        self.users
            .current()
            .map(|u| u.id)
            .ok_or_else(|| GatewayError::validation("no active session"))
    }

    fn require_selected(&self) -> Result<String> {
        self.selected_deck_id()
            .ok_or_else(|| GatewayError::validation("no deck selected"))
    }

    fn set_adding(&self, adding: bool) {
        if let Ok(mut state) = self.state.write() {
            state.adding_deck = adding;
        }
    }

    /// Applies a local mutation to the selected deck's card list and returns
    /// the deck id plus a snapshot of the updated list for the remote write.
    fn mutate_selected_cards(
        &self,
        mutate: impl FnOnce(&mut Vec<CardId>),
    ) -> Option<(String, Vec<CardId>)> {
        let mut state = self.state.write().ok()?;
        let id = state.selected_deck_id.clone()?;
        let deck = state.decks.iter_mut().find(|d| d.id == id)?;
        mutate(&mut deck.cards);
        Some((id, deck.cards.clone()))
    }

    fn spawn_write<F>(&self, operation: &'static str, deck_id: String, write: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        let failures = self.failures.clone();
        tokio::spawn(async move {
            if let Err(error) = write.await {
                warn!(operation, deck_id = %deck_id, %error, "remote write failed");
                let _ = failures.send(WriteFailure {
                    operation,
                    deck_id,
                    error,
                });
            }
        });
    }
}

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::PersistenceGateway;
use super::collections::Collections;
use crate::core::{CardId, Deck, GameDoc, Result, User};

/// Purely in-memory storage engine. State lives for the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    collections: RwLock<Collections>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a game document; match creation happens outside this system.
    pub fn insert_game(&self, fields: JsonMap<String, JsonValue>) -> Result<GameDoc> {
        Ok(self.collections.write()?.insert_game(fields))
    }

    /// Seeds a playground document under a caller-chosen key.
    pub fn insert_playground(&self, id: &str, fields: JsonMap<String, JsonValue>) -> Result<()> {
        self.collections.write()?.insert_playground(id, fields);
        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn create_user(&self, username: &str) -> Result<User> {
        self.collections.write()?.create_user(username)
    }

    async fn get_user(&self, username: &str) -> Result<User> {
        self.collections.read()?.get_user(username)
    }

    async fn create_deck(&self, user_id: &str, name: &str) -> Result<Deck> {
        self.collections.write()?.create_deck(user_id, name)
    }

    async fn list_decks_by_user(&self, user_id: &str) -> Result<Vec<Deck>> {
        Ok(self.collections.read()?.list_decks_by_user(user_id))
    }

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>> {
        Ok(self.collections.read()?.get_deck(deck_id))
    }

    async fn rename_deck(&self, deck_id: &str, name: &str) -> Result<Option<Deck>> {
        Ok(self.collections.write()?.rename_deck(deck_id, name))
    }

    async fn replace_cards(&self, deck_id: &str, cards: &[CardId]) -> Result<Option<Deck>> {
        Ok(self.collections.write()?.replace_cards(deck_id, cards))
    }

    async fn delete_deck(&self, deck_id: &str) -> Result<()> {
        self.collections.write()?.delete_deck(deck_id);
        Ok(())
    }

    async fn copy_deck(
        &self,
        source_deck_id: &str,
        target_username: &str,
        attribution_label: Option<&str>,
    ) -> Result<Deck> {
        self.collections
            .write()?
            .copy_deck(source_deck_id, target_username, attribution_label)
    }

    async fn get_game_by_code(&self, code: i64) -> Result<Option<GameDoc>> {
        Ok(self.collections.read()?.get_game_by_code(code))
    }

    async fn update_game(&self, game_id: &str, patch: &JsonValue) -> Result<()> {
        self.collections.write()?.update_game(game_id, patch)
    }

    async fn get_playground(&self, id: &str) -> Result<Option<JsonValue>> {
        Ok(self.collections.read()?.get_playground(id))
    }

    async fn update_playground(&self, id: &str, patch: &JsonValue) -> Result<()> {
        self.collections.write()?.update_playground(id, patch)
    }
}

//! Shared document-collection state used by both storage engines.
//!
//! Collections keep insertion order, which is what the listing operations
//! promise. Ids are UUID v4 strings assigned on insert.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use uuid::Uuid;

use crate::core::{CardId, Deck, GameDoc, GatewayError, Result, User};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Collections {
    users: Vec<User>,
    decks: Vec<Deck>,
    games: Vec<GameDoc>,
    playgrounds: HashMap<String, JsonMap<String, JsonValue>>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shallow merge of a patch object's top-level fields, the behavior of the
/// original document store's update call.
fn merge_fields(target: &mut JsonMap<String, JsonValue>, patch: &JsonValue) -> Result<()> {
    let Some(object) = patch.as_object() else {
        return Err(GatewayError::validation("patch must be a JSON object"));
    };
    for (key, value) in object {
        target.insert(key.clone(), value.clone());
    }
    Ok(())
}

impl Collections {
    pub fn create_user(&mut self, username: &str) -> Result<User> {
        if username.trim().is_empty() {
            return Err(GatewayError::validation("Username is required"));
        }
        let normalized = username.to_lowercase();
        if self.users.iter().any(|u| u.username == normalized) {
            return Err(GatewayError::AlreadyExists("User".to_string()));
        }
        let id = new_id();
        self.users.push(User {
            id: id.clone(),
            username: normalized,
        });
        // Echo the caller's casing; the stored record stays lowercased.
        Ok(User {
            id,
            username: username.to_string(),
        })
    }

    pub fn get_user(&self, username: &str) -> Result<User> {
        let normalized = username.to_lowercase();
        self.users
            .iter()
            .find(|u| u.username == normalized)
            .cloned()
            .ok_or_else(|| GatewayError::not_found("User"))
    }

    pub fn create_deck(&mut self, user_id: &str, name: &str) -> Result<Deck> {
        let deck = Deck {
            id: new_id(),
            name: name.to_string(),
            user_id: user_id.to_string(),
            cards: Vec::new(),
        };
        self.decks.push(deck.clone());
        Ok(deck)
    }

    pub fn list_decks_by_user(&self, user_id: &str) -> Vec<Deck> {
        self.decks
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn get_deck(&self, deck_id: &str) -> Option<Deck> {
        self.decks.iter().find(|d| d.id == deck_id).cloned()
    }

    pub fn rename_deck(&mut self, deck_id: &str, name: &str) -> Option<Deck> {
        let deck = self.decks.iter_mut().find(|d| d.id == deck_id)?;
        deck.name = name.to_string();
        Some(deck.clone())
    }

    pub fn replace_cards(&mut self, deck_id: &str, cards: &[CardId]) -> Option<Deck> {
        let deck = self.decks.iter_mut().find(|d| d.id == deck_id)?;
        deck.cards = cards.to_vec();
        Some(deck.clone())
    }

    pub fn delete_deck(&mut self, deck_id: &str) {
        self.decks.retain(|d| d.id != deck_id);
    }

    pub fn copy_deck(
        &mut self,
        source_deck_id: &str,
        target_username: &str,
        attribution_label: Option<&str>,
    ) -> Result<Deck> {
        let source = self
            .get_deck(source_deck_id)
            .ok_or_else(|| GatewayError::not_found("Deck"))?;
        let target = self.get_user(target_username)?;

        let name = match attribution_label {
            Some(label) => format!("{} ({})", source.name, label),
            None => source.name.clone(),
        };

        let copy = Deck {
            id: new_id(),
            name,
            user_id: target.id,
            cards: source.cards.clone(),
        };
        self.decks.push(copy.clone());
        Ok(copy)
    }

    pub fn get_game_by_code(&self, code: i64) -> Option<GameDoc> {
        self.games.iter().find(|g| g.code() == Some(code)).cloned()
    }

    pub fn update_game(&mut self, game_id: &str, patch: &JsonValue) -> Result<()> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or_else(|| GatewayError::not_found("Game"))?;
        merge_fields(&mut game.fields, patch)
    }

    pub fn get_playground(&self, id: &str) -> Option<JsonValue> {
        self.playgrounds
            .get(id)
            .map(|fields| JsonValue::Object(fields.clone()))
    }

    pub fn update_playground(&mut self, id: &str, patch: &JsonValue) -> Result<()> {
        let fields = self
            .playgrounds
            .get_mut(id)
            .ok_or_else(|| GatewayError::not_found("Playground"))?;
        merge_fields(fields, patch)
    }

    /// Seeds a game document. Used by operator tooling and tests; match
    /// creation itself happens outside this system.
    pub fn insert_game(&mut self, fields: JsonMap<String, JsonValue>) -> GameDoc {
        let doc = GameDoc {
            id: new_id(),
            fields,
        };
        self.games.push(doc.clone());
        doc
    }

    /// Seeds a playground document under a caller-chosen key.
    pub fn insert_playground(&mut self, id: &str, fields: JsonMap<String, JsonValue>) {
        self.playgrounds.insert(id.to_string(), fields);
    }
}

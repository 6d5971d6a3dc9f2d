use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tempfile::NamedTempFile;
use tracing::info;

use super::PersistenceGateway;
use super::collections::Collections;
use crate::core::{CardId, Deck, GameDoc, GatewayError, Result, User};

const SNAPSHOT_FILE: &str = "duelhub.snapshot";

/// Storage engine with a MessagePack snapshot rewritten after every mutation
/// and reloaded on open. The snapshot is written to a temp file in the same
/// directory and atomically renamed over the previous one, so a crash
/// mid-write leaves the last good snapshot intact.
#[derive(Debug)]
pub struct DurableGateway {
    collections: RwLock<Collections>,
    snapshot_path: PathBuf,
}

impl DurableGateway {
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let snapshot_path = data_dir.join(SNAPSHOT_FILE);

        let collections = if snapshot_path.exists() {
            let bytes = std::fs::read(&snapshot_path)?;
            let loaded: Collections = rmp_serde::from_slice(&bytes)
                .map_err(|e| GatewayError::Backend(format!("corrupt snapshot: {e}")))?;
            info!(path = %snapshot_path.display(), "loaded snapshot");
            loaded
        } else {
            Collections::default()
        };

        Ok(Self {
            collections: RwLock::new(collections),
            snapshot_path,
        })
    }

    /// Writes the snapshot while the caller still holds the write lock, so
    /// the on-disk state never skips a mutation.
    fn persist(&self, collections: &Collections) -> Result<()> {
        let bytes = rmp_serde::to_vec(collections)
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        let dir = self
            .snapshot_path
            .parent()
            .ok_or_else(|| GatewayError::Backend("snapshot path has no parent".to_string()))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&self.snapshot_path)
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for DurableGateway {
    async fn create_user(&self, username: &str) -> Result<User> {
        let mut collections = self.collections.write()?;
        let user = collections.create_user(username)?;
        self.persist(&collections)?;
        Ok(user)
    }

    async fn get_user(&self, username: &str) -> Result<User> {
        self.collections.read()?.get_user(username)
    }

    async fn create_deck(&self, user_id: &str, name: &str) -> Result<Deck> {
        let mut collections = self.collections.write()?;
        let deck = collections.create_deck(user_id, name)?;
        self.persist(&collections)?;
        Ok(deck)
    }

    async fn list_decks_by_user(&self, user_id: &str) -> Result<Vec<Deck>> {
        Ok(self.collections.read()?.list_decks_by_user(user_id))
    }

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>> {
        Ok(self.collections.read()?.get_deck(deck_id))
    }

    async fn rename_deck(&self, deck_id: &str, name: &str) -> Result<Option<Deck>> {
        let mut collections = self.collections.write()?;
        let deck = collections.rename_deck(deck_id, name);
        if deck.is_some() {
            self.persist(&collections)?;
        }
        Ok(deck)
    }

    async fn replace_cards(&self, deck_id: &str, cards: &[CardId]) -> Result<Option<Deck>> {
        let mut collections = self.collections.write()?;
        let deck = collections.replace_cards(deck_id, cards);
        if deck.is_some() {
            self.persist(&collections)?;
        }
        Ok(deck)
    }

    async fn delete_deck(&self, deck_id: &str) -> Result<()> {
        let mut collections = self.collections.write()?;
        collections.delete_deck(deck_id);
        self.persist(&collections)
    }

    async fn copy_deck(
        &self,
        source_deck_id: &str,
        target_username: &str,
        attribution_label: Option<&str>,
    ) -> Result<Deck> {
        let mut collections = self.collections.write()?;
        let deck = collections.copy_deck(source_deck_id, target_username, attribution_label)?;
        self.persist(&collections)?;
        Ok(deck)
    }

    async fn get_game_by_code(&self, code: i64) -> Result<Option<GameDoc>> {
        Ok(self.collections.read()?.get_game_by_code(code))
    }

    async fn update_game(&self, game_id: &str, patch: &JsonValue) -> Result<()> {
        let mut collections = self.collections.write()?;
        collections.update_game(game_id, patch)?;
        self.persist(&collections)
    }

    async fn get_playground(&self, id: &str) -> Result<Option<JsonValue>> {
        Ok(self.collections.read()?.get_playground(id))
    }

    async fn update_playground(&self, id: &str, patch: &JsonValue) -> Result<()> {
        let mut collections = self.collections.write()?;
        collections.update_playground(id, patch)?;
        self.persist(&collections)
    }
}

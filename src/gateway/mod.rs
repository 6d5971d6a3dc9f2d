//! Persistence gateway: one logical CRUD surface, pluggable storage engine.
//!
//! Call sites hold an `Arc<dyn PersistenceGateway>` and never branch on which
//! backend is behind it. Both backends implement the same contract over the
//! same four document collections (users, decks, games, playgrounds).

mod collections;
mod durable;
mod memory;

pub use durable::DurableGateway;
pub use memory::MemoryGateway;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::core::{CardId, Deck, GameDoc, Result, User};

/// Storage engine selection, wired through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendKind {
    /// In-memory collections; state is lost on shutdown.
    Memory,
    /// In-memory collections with a MessagePack snapshot rewritten on every
    /// mutation and reloaded on open.
    Durable,
}

/// Opens the configured backend. `data_dir` is only touched by the durable
/// engine.
pub fn open(kind: BackendKind, data_dir: &Path) -> Result<Arc<dyn PersistenceGateway>> {
    Ok(match kind {
        BackendKind::Memory => Arc::new(MemoryGateway::new()),
        BackendKind::Durable => Arc::new(DurableGateway::open(data_dir)?),
    })
}

/// The fixed set of logical operations every backend must support.
///
/// Semantics shared by all implementations:
/// - usernames are matched case-insensitively and stored lowercased;
/// - `rename_deck`/`replace_cards` on an absent deck are no-ops returning
///   `None`;
/// - `delete_deck` is idempotent;
/// - game/playground updates are shallow merges of top-level fields.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Registers a username. Fails with `AlreadyExists` when a
    /// case-insensitive match is already registered. The returned record
    /// echoes the caller's casing.
    async fn create_user(&self, username: &str) -> Result<User>;

    /// Resolves a username (case-insensitive). Fails with `NotFound`.
    async fn get_user(&self, username: &str) -> Result<User>;

    /// Creates an empty deck owned by `user_id`.
    async fn create_deck(&self, user_id: &str, name: &str) -> Result<Deck>;

    /// All decks owned by `user_id`, in creation order. Empty if none.
    async fn list_decks_by_user(&self, user_id: &str) -> Result<Vec<Deck>>;

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>>;

    async fn rename_deck(&self, deck_id: &str, name: &str) -> Result<Option<Deck>>;

    /// Overwrites the deck's whole card sequence. Last write wins.
    async fn replace_cards(&self, deck_id: &str, cards: &[CardId]) -> Result<Option<Deck>>;

    /// Deletes a deck; deleting an absent id succeeds.
    async fn delete_deck(&self, deck_id: &str) -> Result<()>;

    /// Copies `source_deck_id` into a new deck owned by the resolved target
    /// user. The name is suffixed with ` (<label>)` when an attribution
    /// label is supplied. Fails with `NotFound` when the source deck or the
    /// target user is absent.
    async fn copy_deck(
        &self,
        source_deck_id: &str,
        target_username: &str,
        attribution_label: Option<&str>,
    ) -> Result<Deck>;

    async fn get_game_by_code(&self, code: i64) -> Result<Option<GameDoc>>;

    /// Merges `patch`'s top-level fields into the game document. Fails with
    /// `NotFound` when the document is absent.
    async fn update_game(&self, game_id: &str, patch: &JsonValue) -> Result<()>;

    async fn get_playground(&self, id: &str) -> Result<Option<JsonValue>>;

    async fn update_playground(&self, id: &str, patch: &JsonValue) -> Result<()>;
}

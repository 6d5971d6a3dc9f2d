use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::catalog::CardSource;
use super::deck_store::DeckStore;
use super::user_store::UserStore;
use crate::core::GatewayError;
use crate::gateway::PersistenceGateway;

/// A fire-and-forget remote write that came back with an error. The local
/// state was already mutated and is not rolled back; the failure is made
/// observable here so a later revision can add retry or reconciliation
/// without changing store call sites.
#[derive(Debug)]
pub struct WriteFailure {
    pub operation: &'static str,
    pub deck_id: String,
    pub error: GatewayError,
}

/// Composition root for one client session.
///
/// Owns the stores and the write-failure channel; components receive this
/// context explicitly instead of reaching for ambient singletons.
pub struct Session {
    pub users: Arc<UserStore>,
    pub decks: DeckStore,
    failures: Mutex<UnboundedReceiver<WriteFailure>>,
}

impl Session {
    pub fn new(
        gateway: Arc<dyn PersistenceGateway>,
        cards: Arc<dyn CardSource>,
        data_dir: PathBuf,
    ) -> Self {
        let (failure_tx, failure_rx): (
            UnboundedSender<WriteFailure>,
            UnboundedReceiver<WriteFailure>,
        ) = mpsc::unbounded_channel();

        let users = Arc::new(UserStore::new(Arc::clone(&gateway), data_dir));
        let decks = DeckStore::new(gateway, cards, Arc::clone(&users), failure_tx);

        Self {
            users,
            decks,
            failures: Mutex::new(failure_rx),
        }
    }

    /// Pops the next recorded write failure, if any. Non-blocking.
    pub fn next_write_failure(&self) -> Option<WriteFailure> {
        self.failures.lock().ok()?.try_recv().ok()
    }
}

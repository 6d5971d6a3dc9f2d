use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Result, User};
use crate::gateway::PersistenceGateway;

const SESSION_FILE: &str = "session.json";

/// Saved identity for session restore, the stand-in for the browser's local
/// storage slot.
#[derive(Debug, Serialize, Deserialize)]
struct SavedSession {
    username: String,
}

#[derive(Debug, Default)]
struct UserState {
    user: Option<User>,
    loading: bool,
}

/// Resolves a human-chosen username to a stable identity record.
///
/// `add_user` surfaces registration failures so the UI can report a taken
/// username; lookups swallow misses and leave the session unset.
pub struct UserStore {
    gateway: Arc<dyn PersistenceGateway>,
    state: RwLock<UserState>,
    session_path: PathBuf,
}

impl UserStore {
    pub fn new(gateway: Arc<dyn PersistenceGateway>, data_dir: PathBuf) -> Self {
        Self {
            gateway,
            state: RwLock::new(UserState::default()),
            session_path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn current(&self) -> Option<User> {
        self.state.read().ok()?.user.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.read().map(|s| s.loading).unwrap_or(false)
    }

    /// Restores the previous session, if a username was saved. A failed
    /// resolve leaves the store logged out; the user re-registers.
    pub async fn login_existing(&self) {
        if let Some(saved) = self.load_saved_username() {
            self.get_user(&saved).await;
        }
    }

    /// Registers a username. On success the identity is cached and the
    /// username saved for restore; `AlreadyExists` propagates to the caller.
    pub async fn add_user(&self, username: &str) -> Result<User> {
        let user = self.gateway.create_user(username).await?;
        if let Ok(mut state) = self.state.write() {
            state.user = Some(user.clone());
        }
        self.save_username(username);
        Ok(user)
    }

    /// Resolves a username, skipping the call when the cached identity
    /// already matches. A miss is logged and swallowed.
    pub async fn get_user(&self, username: &str) {
        let already_cached = self
            .current()
            .is_some_and(|u| u.username.eq_ignore_ascii_case(username));
        if already_cached {
            return;
        }

        if let Ok(mut state) = self.state.write() {
            state.loading = true;
        }
        match self.gateway.get_user(username).await {
            Ok(user) => {
                if let Ok(mut state) = self.state.write() {
                    state.user = Some(user);
                }
                self.save_username(username);
            }
            Err(error) => {
                debug!(username, %error, "user not found");
            }
        }
        if let Ok(mut state) = self.state.write() {
            state.loading = false;
        }
    }

    fn load_saved_username(&self) -> Option<String> {
        let bytes = std::fs::read(&self.session_path).ok()?;
        let saved: SavedSession = serde_json::from_slice(&bytes).ok()?;
        Some(saved.username)
    }

    fn save_username(&self, username: &str) {
        let saved = SavedSession {
            username: username.to_string(),
        };
        let write = serde_json::to_vec_pretty(&saved)
            .map_err(std::io::Error::other)
            .and_then(|bytes| std::fs::write(&self.session_path, bytes));
        if let Err(error) = write {
            warn!(%error, "could not save session");
        }
    }
}

//! Client-session core: the stores the UI binds to.
//!
//! Everything here is process-local; there is no cross-session
//! synchronization beyond refetching through the gateway.

pub mod catalog;
pub mod deck_store;
pub mod session;
pub mod user_store;

pub use catalog::{CardSource, HttpCatalog};
pub use deck_store::DeckStore;
pub use session::{Session, WriteFailure};
pub use user_store::UserStore;

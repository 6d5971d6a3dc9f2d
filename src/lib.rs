// ============================================================================
// duelhub Library
// ============================================================================

pub mod client;
pub mod config;
pub mod core;
pub mod filters;
pub mod gateway;
pub mod http;

// Re-export main types for convenience
pub use config::Config;
pub use core::{CardId, Deck, GameDoc, GatewayError, Result, User, YugiohCard};
pub use gateway::{BackendKind, DurableGateway, MemoryGateway, PersistenceGateway};
pub use http::{AppState, build_router};

pub use client::{Session, WriteFailure};

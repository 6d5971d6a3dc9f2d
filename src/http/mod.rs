//! HTTP interface: one route per logical persistence operation.
//!
//! Mutations are POSTs with a JSON body; lookups are GETs with the key as
//! the final path segment, mirroring the function-per-verb layout the client
//! stores call into.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::gateway::PersistenceGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn PersistenceGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::healthcheck))
        .route("/add-user", post(handlers::add_user))
        .route("/get-user/:username", get(handlers::get_user))
        .route("/add-deck", post(handlers::add_deck))
        .route("/get-decks/:user_id", get(handlers::get_decks))
        .route("/get-deck/:deck_id", get(handlers::get_deck))
        .route("/remove-deck", post(handlers::remove_deck))
        .route("/add-card-to-deck", post(handlers::replace_cards))
        .route("/remove-card-from-deck", post(handlers::replace_cards))
        .route("/edit-deck-name", post(handlers::edit_deck_name))
        .route("/share-deck", post(handlers::share_deck))
        .route("/get-game-by-code/:code", get(handlers::get_game_by_code))
        .route("/update-game", post(handlers::update_game))
        .route("/get-playground/:id", get(handlers::get_playground))
        .route("/update-playground", post(handlers::update_playground))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::AppState;
use super::error::{ApiError, ApiResult};
use crate::core::{CardId, Deck, GameDoc, User};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub username: String,
}

pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<AddUserRequest>,
) -> ApiResult<Json<User>> {
    let user = state.gateway.create_user(&request.username).await?;
    Ok(Json(user))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state.gateway.get_user(&username).await?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDeckRequest {
    pub user_id: String,
    pub deck_name: String,
}

pub async fn add_deck(
    State(state): State<AppState>,
    Json(request): Json<AddDeckRequest>,
) -> ApiResult<Json<Deck>> {
    let deck = state
        .gateway
        .create_deck(&request.user_id, &request.deck_name)
        .await?;
    Ok(Json(deck))
}

pub async fn get_decks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Deck>>> {
    let decks = state.gateway.list_decks_by_user(&user_id).await?;
    Ok(Json(decks))
}

pub async fn get_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> ApiResult<Json<Option<Deck>>> {
    let deck = state.gateway.get_deck(&deck_id).await?;
    Ok(Json(deck))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDeckRequest {
    pub deck_id: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveDeckResponse {
    pub id: String,
    pub deleted: bool,
}

pub async fn remove_deck(
    State(state): State<AppState>,
    Json(request): Json<RemoveDeckRequest>,
) -> ApiResult<Json<RemoveDeckResponse>> {
    state.gateway.delete_deck(&request.deck_id).await?;
    Ok(Json(RemoveDeckResponse {
        id: request.deck_id,
        deleted: true,
    }))
}

/// Card mutations ship the full replacement array; the client already
/// applied the change locally.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceCardsRequest {
    pub deck_id: String,
    pub cards: Vec<CardId>,
}

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub id: String,
    pub cards: Vec<CardId>,
}

pub async fn replace_cards(
    State(state): State<AppState>,
    Json(request): Json<ReplaceCardsRequest>,
) -> ApiResult<Json<Option<CardsResponse>>> {
    let updated = state
        .gateway
        .replace_cards(&request.deck_id, &request.cards)
        .await?;
    Ok(Json(updated.map(|deck| CardsResponse {
        id: deck.id,
        cards: deck.cards,
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDeckNameRequest {
    pub deck_id: String,
    pub name: String,
}

pub async fn edit_deck_name(
    State(state): State<AppState>,
    Json(request): Json<EditDeckNameRequest>,
) -> ApiResult<Json<Option<Deck>>> {
    let updated = state
        .gateway
        .rename_deck(&request.deck_id, &request.name)
        .await?;
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareDeckRequest {
    pub deck_id: Option<String>,
    pub target_username: Option<String>,
    /// Sharer's username; when present the copy's name carries it as an
    /// attribution suffix.
    pub username: Option<String>,
}

pub async fn share_deck(
    State(state): State<AppState>,
    Json(request): Json<ShareDeckRequest>,
) -> ApiResult<Json<Deck>> {
    let deck_id = request
        .deck_id
        .ok_or_else(|| ApiError::bad_request("Deck ID is required"))?;
    let target_username = request
        .target_username
        .ok_or_else(|| ApiError::bad_request("Target username is required"))?;

    let deck = state
        .gateway
        .copy_deck(&deck_id, &target_username, request.username.as_deref())
        .await?;
    Ok(Json(deck))
}

pub async fn get_game_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<GameDoc>> {
    let code: i64 = code
        .parse()
        .map_err(|_| ApiError::bad_request("Game code is required"))?;

    let game = state
        .gateway
        .get_game_by_code(code)
        .await?
        .ok_or_else(|| ApiError::not_found("Game not found"))?;
    Ok(Json(game))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub game_id: Option<String>,
    #[serde(default)]
    pub game_state: JsonValue,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

pub async fn update_game(
    State(state): State<AppState>,
    Json(request): Json<UpdateGameRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let game_id = request
        .game_id
        .ok_or_else(|| ApiError::bad_request("Game ID is required"))?;

    state
        .gateway
        .update_game(&game_id, &request.game_state)
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}

#[derive(Debug, Serialize)]
pub struct PlaygroundResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

pub async fn get_playground(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.gateway.get_playground(&id).await? {
        Some(data) => Ok(Json(PlaygroundResponse {
            exists: true,
            data: Some(data),
        })
        .into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(PlaygroundResponse {
                exists: false,
                data: None,
            }),
        )
            .into_response()),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaygroundRequest {
    /// Playground documents are keyed by the deck id they scratch for.
    pub deck_id: Option<String>,
    #[serde(default)]
    pub state: JsonValue,
}

pub async fn update_playground(
    State(state): State<AppState>,
    Json(request): Json<UpdatePlaygroundRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let deck_id = request
        .deck_id
        .ok_or_else(|| ApiError::bad_request("Deck ID is required"))?;

    state
        .gateway
        .update_playground(&deck_id, &request.state)
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}

//! Character handlers: filtered list and random pick.

use crate::error::AppError;
use crate::model::CharacterBody;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// Query string for `GET /characters/`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring of the character name.
    pub name: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CharacterBody>>, AppError> {
    let rows = state.catalog.list(params.name.as_deref()).await?;
    tracing::debug!(filter = ?params.name, count = rows.len(), "listed characters");
    Ok(Json(rows.into_iter().map(CharacterBody::from).collect()))
}

pub async fn random(State(state): State<AppState>) -> Result<Json<CharacterBody>, AppError> {
    let character = state.catalog.random().await?;
    Ok(Json(CharacterBody::from(character)))
}

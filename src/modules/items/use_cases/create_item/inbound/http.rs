use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::modules::items::core::item::Item;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

// A missing name is left to the store to reject, same as an empty one.
#[derive(Deserialize)]
pub struct CreateItemBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateItemBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(body) = body?;
    let item = state.store.create(body.name, body.description).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

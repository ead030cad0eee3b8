use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::items::core::item::Item;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.store.get(&id).await?))
}

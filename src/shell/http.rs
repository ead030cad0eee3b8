use axum::{
    Router,
    routing::{any, get},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::health::inbound::http as health_http;
use crate::modules::items::use_cases::create_item::inbound::http as create_http;
use crate::modules::items::use_cases::delete_item::inbound::http as delete_http;
use crate::modules::items::use_cases::get_item::inbound::http as get_http;
use crate::modules::items::use_cases::list_items::inbound::http as list_http;
use crate::modules::items::use_cases::update_item::inbound::http as update_http;
use crate::shell::errors::{method_not_allowed, missing_id, not_found};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health_http::handle))
        .route(
            "/items",
            get(list_http::handle)
                .head(method_not_allowed)
                .post(create_http::handle)
                .fallback(method_not_allowed),
        )
        .route("/items/", any(missing_id))
        .route(
            "/items/{id}",
            get(get_http::handle)
                .head(method_not_allowed)
                .put(update_http::handle)
                .delete(delete_http::handle)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

use axum::{Json, extract::State};

use crate::modules::items::core::item::Item;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

#[cfg(test)]
mod list_items_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::{make_seeded_state, make_test_state, read_json};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/items", get(handle)).with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_list_when_no_items_exist() {
        let response = app(make_test_state())
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_200_with_every_item() {
        let (state, item) = make_seeded_state().await;

        let response = app(state)
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        let items = json.as_array().expect("expected a JSON array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], item.id);
        assert_eq!(items[0]["name"], "Widget");
    }
}

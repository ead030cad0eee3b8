use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::modules::items::core::item::{Item, ItemPatch};
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ItemPatch>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(patch) = body?;
    Ok(Json(state.store.update(&id, patch).await?))
}

#[cfg(test)]
mod update_item_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::put,
    };
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::{json_request, make_seeded_state, make_test_state, read_json};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/items/{id}", put(handle))
            .with_state(state)
    }

    #[rstest]
    #[case(r#"{"name":"Gadget"}"#, "Gadget", "A widget")]
    #[case(r#"{"description":"Renamed"}"#, "Widget", "Renamed")]
    #[case(r#"{"name":"Gadget","description":"Renamed"}"#, "Gadget", "Renamed")]
    #[case(r#"{"name":"","description":""}"#, "Widget", "A widget")]
    #[case("{}", "Widget", "A widget")]
    #[tokio::test]
    async fn it_should_merge_the_supplied_fields(
        #[case] body: &str,
        #[case] name: &str,
        #[case] description: &str,
    ) {
        let (state, item) = make_seeded_state().await;

        let response = app(state.clone())
            .oneshot(json_request(Method::PUT, &format!("/items/{}", item.id), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["id"], item.id);
        assert_eq!(json["name"], name);
        assert_eq!(json["description"], description);

        let stored = state.store.get(&item.id).await.unwrap();
        assert_eq!(stored.name, name);
        assert_eq!(stored.created_at, item.created_at);
        assert!(stored.updated_at >= item.updated_at);
    }

    #[tokio::test]
    async fn it_should_return_404_when_the_item_does_not_exist() {
        let response = app(make_test_state())
            .oneshot(json_request(
                Method::PUT,
                "/items/nonexistent",
                r#"{"name":"Updated Item"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_400_on_a_malformed_body_and_leave_the_item_untouched() {
        let (state, item) = make_seeded_state().await;

        let response = app(state.clone())
            .oneshot(json_request(
                Method::PUT,
                &format!("/items/{}", item.id),
                r#"{"name":["not","a","string"]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store.get(&item.id).await.unwrap(), item);
    }

    #[tokio::test]
    async fn it_should_return_400_naming_the_content_type_when_it_is_not_json() {
        let (state, item) = make_seeded_state().await;

        let response = app(state.clone())
            .oneshot(
                Request::put(format!("/items/{}", item.id))
                    .header("content-type", "text/plain")
                    .body(Body::from(r#"{"name":"Gadget"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await["error"],
            "Content-Type must be application/json"
        );
        assert_eq!(state.store.get(&item.id).await.unwrap(), item);
    }
}
